//! OAuth 도메인 모델

pub mod oauth_provider;
pub mod external_profile;
pub mod token_response;

pub use oauth_provider::OAuthProvider;
pub use external_profile::ExternalProfile;
pub use token_response::OAuthTokenResponse;
