//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 계층의 실패를
//! 하나의 타입으로 모읍니다. 응답 본문은 브라우저 폼 흐름에 맞춰 plain text이며,
//! 사용자에게 보여도 되는 메시지만 노출합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn save(text: &str) -> AppResult<()> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::ValidationError("Secret must not be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use thiserror::Error;

/// 저장소, 설정, 내부 오류 등 세부 내용을 숨겨야 하는 경우의 공개 메시지
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 저장소 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 가입 등 충돌 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 자격 증명 불일치 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// OAuth 프로바이더, 푸시 서비스 등 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 필수 설정 누락 또는 잘못된 설정값 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 그대로 보여줄 수 있는 메시지
    ///
    /// 검증, 충돌, 인증, 404 에러는 원문을 그대로 돌려주고
    /// 나머지는 일반 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// 서버 측 장애인지 여부 (로그 레벨 결정용)
    pub fn is_server_fault(&self) -> bool {
        self.http_status().is_server_error()
    }

    fn http_status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 측 장애는 원문을 로그로만 남기고 응답에는 공개 메시지만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_server_fault() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.http_status())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
