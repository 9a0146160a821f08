//! # Data Transfer Objects
//!
//! 브라우저 폼과 OAuth 콜백 쿼리를 매핑하는 요청 타입입니다.

pub mod users;

pub use users::*;
