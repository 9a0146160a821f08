//! # Domain Layer Module
//!
//! 게시판의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 사용자 레코드
//! ├── DTOs      - 폼/쿼리 요청 매핑과 검증 규칙
//! └── Models    - 세션 주체, 접근 모드, OAuth 프로바이더 등 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Redis)
//! ```
//!
//! 도메인 타입은 HTTP 프레임워크나 저장소 구현을 알지 못합니다.
//! 예외는 [`auth::current_user::CurrentUser`]의 `FromRequest` 구현 하나뿐입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::user::User;
pub use models::*;
