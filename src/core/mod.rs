//! # Core Module
//!
//! 애플리케이션 조립 지점입니다. 전역 레지스트리 대신 [`AppState`]를
//! 시작 시점에 만들어 `web::Data`로 핸들러와 미들웨어에 넘깁니다.

pub mod state;

pub use state::AppState;
