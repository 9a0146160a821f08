//! # HTTP Request Handlers Module
//!
//! 브라우저 요청을 처리하는 핸들러입니다. 페이지는 HTML로 렌더링하고,
//! 폼 제출과 로그인 흐름은 302 리다이렉트로 응답합니다.
//!
//! ```text
//! Browser
//!    │ HTML form / 302
//!    ▼
//! Handlers (이 모듈)        ← Web Layer
//!    │
//!    ▼
//! Services                  ← CredentialReconciler, SessionManager, ...
//!    │
//!    ▼
//! Repositories              ← Mongo / Redis / Memory
//! ```
//!
//! ## 모듈 구성
//!
//! - **`pages`**: `/`, `/login`, `/register`, `/secrets`, `/health`
//! - **`auth`**: 로컬 가입/로그인, 로그아웃, OAuth 시작과 콜백
//! - **`secrets`**: 비밀글 작성 폼과 제출 (`/submit`, 로그인 필수)
//!
//! 실패 응답은 [`crate::errors::AppError`]가 평문 메시지로 변환합니다.
//! 단, OAuth 흐름의 실패는 상세 내용 없이 `/login`으로 돌려보냅니다.

use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use actix_web::http::header::LOCATION;

pub mod pages;
pub mod auth;
pub mod secrets;

/// 302 Found 리다이렉트
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// 쿠키를 붙인 302 리다이렉트
pub(crate) fn redirect_with_cookie(location: &str, cookie: Cookie<'static>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .cookie(cookie)
        .finish()
}
