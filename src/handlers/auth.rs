//! Authentication HTTP Handlers
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/register` | 세션 쿠키 + `/secrets` | 409/400 평문 |
//! | `POST` | `/login` | 세션 쿠키 + `/secrets` | 401/400 평문 |
//! | `GET` | `/logout` | 쿠키 만료 + `/login` | - |
//! | `GET` | `/auth/{provider}` | 동의 화면 | `/login` |
//! | `GET` | `/auth/{provider}/secrets` | 세션 쿠키 + `/secrets` | `/login` |
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::{validation_message, CredentialsForm, OAuthCallbackQuery};
use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult};
use crate::handlers::{redirect, redirect_with_cookie};
use crate::middlewares::LOGIN_PATH;
use crate::services::auth::LoginAttempt;

const AFTER_LOGIN: &str = "/secrets";

/// 로컬 회원가입
///
/// 가입에 성공하면 바로 로그인 상태가 됩니다.
#[post("/register")]
pub async fn register(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> AppResult<HttpResponse> {
    let form = validated(form.into_inner())?;
    let previous = state.sessions.session_id(&req);

    let session = state
        .reconciler
        .reconcile(
            LoginAttempt::Register {
                username: form.username,
                password: form.password,
            },
            previous.as_deref(),
        )
        .await?;

    Ok(redirect_with_cookie(AFTER_LOGIN, session.cookie))
}

/// 로컬 로그인
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> AppResult<HttpResponse> {
    let form = validated(form.into_inner())?;
    let previous = state.sessions.session_id(&req);

    let session = state
        .reconciler
        .reconcile(
            LoginAttempt::Login {
                username: form.username,
                password: form.password,
            },
            previous.as_deref(),
        )
        .await?;

    Ok(redirect_with_cookie(AFTER_LOGIN, session.cookie))
}

#[get("/logout")]
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let removal = state.sessions.destroy(&req).await;
    redirect_with_cookie(LOGIN_PATH, removal)
}

/// OAuth 로그인 시작
///
/// 설정되지 않은 프로바이더나 state 저장 실패는 로그인 페이지로 돌려보냅니다.
#[get("/{provider}")]
pub async fn oauth_begin(
    provider: web::Path<String>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let provider = parse_provider(&provider)?;

    match state.oauth.begin(provider).await {
        Ok(consent_url) => Ok(redirect(&consent_url)),
        Err(e) => {
            log::warn!("⚠️ {} 로그인 시작 실패: {}", provider.label(), e);
            Ok(redirect(LOGIN_PATH))
        }
    }
}

/// OAuth 콜백
///
/// 어떤 단계에서 실패하든 상세 내용 없이 `/login`으로 보냅니다.
#[get("/{provider}/secrets")]
pub async fn oauth_callback(
    req: HttpRequest,
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let provider = parse_provider(&provider)?;
    let previous = state.sessions.session_id(&req);

    let outcome = async {
        let profile = state.oauth.complete(provider, &query).await?;
        state
            .reconciler
            .reconcile(LoginAttempt::OAuth(profile), previous.as_deref())
            .await
    }
    .await;

    match outcome {
        Ok(session) => Ok(redirect_with_cookie(AFTER_LOGIN, session.cookie)),
        Err(e) => {
            log::warn!("⚠️ {} 로그인 실패: {}", provider.label(), e);
            Ok(redirect(LOGIN_PATH))
        }
    }
}

fn parse_provider(segment: &str) -> AppResult<OAuthProvider> {
    OAuthProvider::from_path(segment)
        .ok_or_else(|| AppError::NotFound(format!("Unknown login provider: {}", segment)))
}

fn validated(form: CredentialsForm) -> AppResult<CredentialsForm> {
    let form = form.normalized();
    form.validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;
    Ok(form)
}
