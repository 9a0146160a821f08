//! 인증 서비스 모듈
//!
//! - [`session_manager`] - 세션 레코드와 서명 쿠키
//! - [`credential_reconciler`] - 로그인 이벤트를 사용자 신원으로 정리
//! - [`oauth_gateway`] - 프로바이더 HTTP 호출 (토큰 교환, 프로필 조회)
//! - [`oauth_flow`] - state 발급과 콜백 검증

pub mod session_manager;
pub mod credential_reconciler;
pub mod oauth_gateway;
pub mod oauth_flow;

pub use session_manager::{EstablishedSession, SessionManager};
pub use credential_reconciler::{CredentialReconciler, LoginAttempt};
pub use oauth_gateway::{HttpOAuthGateway, OAuthGateway};
pub use oauth_flow::OAuthFlow;
