//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 접근 게이트 (AccessGate)
//! - 서명된 세션 쿠키 검증
//! - 세션 레코드로 사용자 조회 후 request extension에 저장
//! - 선택적/필수 모드 지원 (필수 모드는 `/login`으로 리다이렉트)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AccessGate;
//!
//! App::new()
//!     .wrap(AccessGate::optional())          // 모든 페이지에서 로그인 상태 표시
//!     .service(
//!         web::scope("/submit")
//!             .wrap(AccessGate::required())  // 비밀글 작성은 로그인 필수
//!             .service(submit_form)
//!     )
//! ```

pub mod access_gate;
mod access_gate_inner;

pub use access_gate::{is_authenticated, AccessGate};
pub use access_gate_inner::LOGIN_PATH;
