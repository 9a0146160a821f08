//! 비밀글 작성 핸들러
//!
//! `/submit` 스코프는 `AccessGate::required()`로 감싸져 있어
//! 여기까지 온 요청에는 항상 [`CurrentUser`]가 있습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::auth::CurrentUser;
use crate::domain::dto::{validation_message, SubmitSecretForm, SECRET_MAX_CHARS};
use crate::errors::{AppError, AppResult};
use crate::handlers::redirect;
use crate::middlewares::LOGIN_PATH;
use crate::views::{render, SubmitView};

#[get("")]
pub async fn submit_page(_current: CurrentUser) -> AppResult<HttpResponse> {
    render(&SubmitView {
        logged_in: true,
        max_chars: SECRET_MAX_CHARS,
    })
}

/// 비밀글 저장
///
/// 이전 비밀글은 덮어씁니다. 저장 후 알림은 기다리지 않고 바로 리다이렉트합니다.
#[post("")]
pub async fn submit_secret(
    state: web::Data<AppState>,
    current: CurrentUser,
    form: web::Form<SubmitSecretForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner().normalized();
    form.validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    let Some(user_id) = current.user_id() else {
        return Ok(redirect(LOGIN_PATH));
    };

    match state.identity.set_secret(&user_id, &form.secret).await {
        Ok(()) => {}
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ 비밀글 저장 중 사용자 없음: {}", user_id);
            return Ok(redirect(LOGIN_PATH));
        }
        Err(e) => return Err(e),
    }

    state.notifications.on_secret_saved(&current.user);

    Ok(redirect("/secrets"))
}
