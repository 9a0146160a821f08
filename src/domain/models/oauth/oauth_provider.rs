//! 지원하는 OAuth 프로바이더 정의
//!
//! 프로바이더마다 다른 것은 엔드포인트, 요청 scope, 프로필 응답에서
//! subject id를 꺼내는 필드뿐입니다. 나머지 흐름(state 발급, 코드 교환,
//! 사용자 조회/생성, 세션 수립)은 모든 프로바이더가 공유합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 외부 신원 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::Facebook];

    /// URL 경로 세그먼트(`/auth/{provider}`)에서 프로바이더를 찾습니다.
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "google" => Some(OAuthProvider::Google),
            "facebook" => Some(OAuthProvider::Facebook),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    /// 화면 표시용 이름
    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Facebook => "Facebook",
        }
    }

    /// 사용자 동의 화면 URL
    pub fn authorize_endpoint(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
            OAuthProvider::Facebook => "https://www.facebook.com/v12.0/dialog/oauth",
        }
    }

    /// 인가 코드를 액세스 토큰으로 교환하는 URL
    pub fn token_endpoint(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://oauth2.googleapis.com/token",
            OAuthProvider::Facebook => "https://graph.facebook.com/v12.0/oauth/access_token",
        }
    }

    /// 액세스 토큰으로 프로필을 조회하는 URL
    pub fn profile_endpoint(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://www.googleapis.com/oauth2/v3/userinfo",
            OAuthProvider::Facebook => "https://graph.facebook.com/me?fields=id,name",
        }
    }

    /// 요청 scope. Facebook은 기본 scope(public_profile)를 사용합니다.
    pub fn scope(&self) -> Option<&'static str> {
        match self {
            OAuthProvider::Google => Some("profile"),
            OAuthProvider::Facebook => None,
        }
    }

    /// 사용자 문서에서 subject id를 저장하는 필드명
    pub fn subject_field(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "googleId",
            OAuthProvider::Facebook => "facebookId",
        }
    }

    /// 프로바이더가 인가 코드를 돌려보내는 경로
    pub fn callback_path(&self) -> String {
        format!("/auth/{}/secrets", self.as_str())
    }

    /// 프로필 응답에서 subject id를 꺼냅니다.
    ///
    /// Google userinfo는 `sub`, Facebook Graph는 `id` 필드를 씁니다.
    /// 숫자로 내려오는 경우도 문자열로 정규화합니다.
    pub fn extract_subject(&self, profile: &Value) -> Option<String> {
        let field = match self {
            OAuthProvider::Google => "sub",
            OAuthProvider::Facebook => "id",
        };

        match profile.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path() {
        assert_eq!(OAuthProvider::from_path("google"), Some(OAuthProvider::Google));
        assert_eq!(OAuthProvider::from_path("facebook"), Some(OAuthProvider::Facebook));
        assert_eq!(OAuthProvider::from_path("github"), None);
        assert_eq!(OAuthProvider::from_path("Google"), None);
    }

    #[test]
    fn test_extract_google_subject() {
        let profile = json!({ "sub": "110248495921238986420", "name": "Alice" });
        assert_eq!(
            OAuthProvider::Google.extract_subject(&profile),
            Some("110248495921238986420".to_string())
        );
        assert_eq!(OAuthProvider::Facebook.extract_subject(&profile), None);
    }

    #[test]
    fn test_extract_facebook_subject_number_or_string() {
        assert_eq!(
            OAuthProvider::Facebook.extract_subject(&json!({ "id": "4567" })),
            Some("4567".to_string())
        );
        assert_eq!(
            OAuthProvider::Facebook.extract_subject(&json!({ "id": 4567 })),
            Some("4567".to_string())
        );
        assert_eq!(OAuthProvider::Facebook.extract_subject(&json!({ "id": "  " })), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OAuthProvider::Google).unwrap(), "\"google\"");
        let parsed: OAuthProvider = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(parsed, OAuthProvider::Facebook);
    }

    #[test]
    fn test_callback_path_and_subject_field() {
        assert_eq!(OAuthProvider::Google.callback_path(), "/auth/google/secrets");
        assert_eq!(OAuthProvider::Facebook.subject_field(), "facebookId");
    }
}
