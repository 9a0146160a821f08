//! # Repository Layer
//!
//! 저장소 접근을 trait 뒤로 숨겨 서비스 계층이 구현을 모르게 합니다.
//!
//! - [`users`] - 신원 저장소 (MongoDB / 메모리)
//! - [`sessions`] - 세션 저장소 (Redis / 메모리)

pub mod users;
pub mod sessions;
