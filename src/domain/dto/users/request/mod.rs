//! 사용자 요청 DTO

pub mod credentials_request;
pub mod secret_request;
pub mod oauth_callback_request;

pub use credentials_request::{validation_message, CredentialsForm};
pub use secret_request::{SubmitSecretForm, SECRET_MAX_CHARS};
pub use oauth_callback_request::OAuthCallbackQuery;
