pub mod access_mode;
pub mod current_user;

pub use access_mode::AccessMode;
pub use current_user::CurrentUser;
