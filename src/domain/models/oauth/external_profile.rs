use serde_json::Value;

use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult};

/// 프로바이더가 돌려준 프로필 중 이 서비스가 사용하는 부분
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalProfile {
    pub provider: OAuthProvider,
    /// 프로바이더 내에서 안정적인 사용자 식별자
    pub subject_id: String,
    /// 로그용 표시 이름. 저장하지 않습니다.
    pub display_name: Option<String>,
}

impl ExternalProfile {
    pub fn new(provider: OAuthProvider, subject_id: impl Into<String>) -> Self {
        Self {
            provider,
            subject_id: subject_id.into(),
            display_name: None,
        }
    }

    /// 프로필 JSON에서 subject id와 이름을 읽습니다.
    pub fn from_profile_json(provider: OAuthProvider, profile: &Value) -> AppResult<Self> {
        let subject_id = provider.extract_subject(profile).ok_or_else(|| {
            AppError::ExternalServiceError(format!(
                "{} 프로필 응답에 사용자 식별자가 없습니다",
                provider.label()
            ))
        })?;

        let display_name = profile
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            provider,
            subject_id,
            display_name,
        })
    }
}
