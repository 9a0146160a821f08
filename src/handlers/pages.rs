//! 공개 페이지 핸들러
//!
//! 로그인 여부와 관계없이 열람할 수 있는 페이지입니다.
//! 로그인 상태는 전역 `AccessGate::optional()`이 확인해 둔 결과를
//! [`is_authenticated`]로 읽습니다.

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::AppState;
use crate::errors::AppResult;
use crate::middlewares::is_authenticated;
use crate::views::{render, HomeView, LoginView, ProviderButton, RegisterView, SecretEntry, SecretsView};

#[get("/")]
pub async fn home(req: HttpRequest) -> AppResult<HttpResponse> {
    render(&HomeView {
        logged_in: is_authenticated(&req),
    })
}

#[get("/login")]
pub async fn login_page(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&LoginView {
        logged_in: is_authenticated(&req),
        providers: ProviderButton::for_providers(&state.oauth.enabled_providers()),
    })
}

#[get("/register")]
pub async fn register_page(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render(&RegisterView {
        logged_in: is_authenticated(&req),
        providers: ProviderButton::for_providers(&state.oauth.enabled_providers()),
    })
}

/// 비밀글 목록
///
/// `secret`이 있는 사용자만 작성자 이름과 함께 보여줍니다.
#[get("/secrets")]
pub async fn secrets_page(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let secrets = state
        .identity
        .find_all_with_secret()
        .await?
        .into_iter()
        .filter_map(|user| SecretEntry::from_user(&user))
        .collect();

    render(&SecretsView {
        logged_in: is_authenticated(&req),
        secrets,
    })
}

/// 로드밸런서용 헬스 체크
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "secret_board",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "store_backend": "mongo",
///   "oauth_providers": ["google"],
///   "push_enabled": false
/// }
/// ```
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let providers: Vec<&str> = state
        .oauth
        .enabled_providers()
        .iter()
        .map(|provider| provider.as_str())
        .collect();

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store_backend": state.config.database.backend.as_str(),
        "oauth_providers": providers,
        "push_enabled": state.notifications.is_enabled(),
    }))
}
