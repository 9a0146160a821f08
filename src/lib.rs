//! 시크릿 보드 백엔드
//!
//! 사용자가 익명으로 비밀 한 줄을 남기고, 다른 사람들의 비밀을 구경하는 웹 서비스입니다.
//! 서버가 HTML을 렌더링하고, 로그인 상태는 서명된 세션 쿠키와 서버 측 세션 레코드로 유지합니다.
//!
//! # Features
//!
//! - **로컬 계정**: 사용자명 + bcrypt 해시 비밀번호로 가입/로그인
//! - **소셜 로그인**: Google, Facebook OAuth 2.0 (설정된 프로바이더만 노출)
//! - **세션**: Redis(또는 메모리)에 저장되는 세션, HttpOnly 서명 쿠키
//! - **비밀글**: 사용자당 하나, 새로 제출하면 덮어쓰기
//! - **푸시 알림**: 비밀글이 올라오면 Pusher Beams로 구독자에게 알림
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← AccessGate (optional / required)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers, Views │ ← 폼 처리, askama 템플릿
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 신원, 세션, OAuth, 알림
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 또는 메모리 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secret_board::config::AppConfig;
//! use secret_board::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::new(config, user_repo, session_store, gateway, publisher);
//!
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .wrap(AccessGate::optional())
//!     .configure(configure_all_routes)
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
