//! 사용자 신원 서비스 모듈
//!
//! 로컬 가입과 인증, OAuth 사용자 조회/생성, 비밀글 저장을 담당합니다.

pub mod identity_service;

pub use identity_service::*;
