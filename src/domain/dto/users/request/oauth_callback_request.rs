//! OAuth 콜백 쿼리 DTO

use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// `GET /auth/{provider}/secrets` 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 옵니다.
/// 누락 여부는 서비스 계층에서 판단하므로 모두 선택 필드입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}
