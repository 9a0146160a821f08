//! 비밀글 제출 폼 DTO

use serde::Deserialize;
use validator::Validate;

/// 최대 비밀글 길이 (문자 수)
pub const SECRET_MAX_CHARS: usize = 1000;

/// `POST /submit` 폼
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[validate(length(min = 1, max = 1000, message = "Secret must be between 1 and 1000 characters"))]
    pub secret: String,
}

impl SubmitSecretForm {
    pub fn normalized(mut self) -> Self {
        self.secret = self.secret.trim().to_string();
        self
    }
}
