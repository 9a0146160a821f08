//! 로컬 가입/로그인 폼 DTO
//!
//! `application/x-www-form-urlencoded` 본문의 `username`, `password` 필드를 매핑합니다.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// 가입과 로그인이 공유하는 자격 증명 폼
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(length(min = 1, max = 100, message = "Username must be between 1 and 100 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 200, message = "Password must be between 1 and 200 characters"))]
    pub password: String,
}

impl CredentialsForm {
    /// 사용자명은 앞뒤 공백을 제거해서 사용합니다. 비밀번호는 그대로 둡니다.
    pub fn normalized(mut self) -> Self {
        self.username = self.username.trim().to_string();
        self
    }
}

/// 검증 실패 중 첫 번째 메시지를 사용자에게 보여줄 문장으로 만듭니다.
///
/// 필드 이름 순으로 정렬해 항상 같은 메시지를 고릅니다.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}
