//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 시작 시점에 설정과 리포지토리를 생성자로 받아
//! [`crate::core::AppState`]에 묶여 핸들러로 전달됩니다.

pub mod users;
pub mod auth;
pub mod notifications;
