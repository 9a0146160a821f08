use std::fmt;

use serde::Deserialize;

/// 토큰 엔드포인트 응답
///
/// Google과 Facebook 모두 `access_token`을 JSON으로 돌려줍니다.
/// 나머지 필드는 로그용이며 사용하지 않아도 됩니다.
#[derive(Clone, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl fmt::Debug for OAuthTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthTokenResponse")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facebook_token_response() {
        let json = r#"{"access_token":"EAAB-token","token_type":"bearer","expires_in":5183944}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "EAAB-token");
        assert_eq!(token.expires_in, Some(5183944));
        assert!(!format!("{:?}", token).contains("EAAB-token"));
    }
}
