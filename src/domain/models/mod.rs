pub mod auth;
pub mod notification;
pub mod oauth;
pub mod session;
