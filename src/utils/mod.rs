//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증, 정리
//! - [`display_terminal`] - 시작 배너 출력

pub mod string_utils;
pub mod display_terminal;
