pub mod session_principal;

pub use session_principal::SessionPrincipal;
