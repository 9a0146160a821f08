//! 인증 관련 설정 모듈
//!
//! OAuth 클라이언트 자격 증명, 콜백 URL 기준 주소, 푸시 알림 서비스 설정과
//! 로그인 방식을 구분하는 [`AuthProvider`]를 정의합니다.
//!
//! 클라이언트 ID와 시크릿이 모두 있는 프로바이더만 활성화되며,
//! 그렇지 않은 프로바이더의 라우트는 로그인 페이지로 되돌아갑니다.

use std::fmt;

use crate::config::{lookup_opt, lookup_or, lookup_parse, EnvLookup};
use crate::domain::oauth::OAuthProvider;
use crate::errors::AppResult;

/// 하나의 OAuth 클라이언트 자격 증명
#[derive(Clone)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl OAuthClientConfig {
    /// `{PREFIX}_CLIENT_ID`, `{PREFIX}_CLIENT_SECRET` 둘 다 있어야 Some
    fn from_lookup(lookup: EnvLookup, prefix: &str) -> Option<Self> {
        let client_id = lookup_opt(lookup, &format!("{}_CLIENT_ID", prefix))?;
        let client_secret = lookup_opt(lookup, &format!("{}_CLIENT_SECRET", prefix))?;
        Some(Self { client_id, client_secret })
    }
}

impl fmt::Debug for OAuthClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// OAuth 로그인 설정
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 콜백 URL과 푸시 딥링크의 기준 주소 (예: `http://localhost:5000`)
    pub public_base_url: String,
    pub google: Option<OAuthClientConfig>,
    pub facebook: Option<OAuthClientConfig>,
    /// 발급한 state 값의 유효 시간(초)
    pub state_ttl_seconds: u64,
}

impl OAuthConfig {
    pub fn from_lookup(lookup: EnvLookup) -> AppResult<Self> {
        let public_base_url = lookup_or(lookup, "PUBLIC_BASE_URL", "http://localhost:5000")
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            public_base_url,
            google: OAuthClientConfig::from_lookup(lookup, "GOOGLE"),
            facebook: OAuthClientConfig::from_lookup(lookup, "FACEBOOK"),
            state_ttl_seconds: lookup_parse(lookup, "OAUTH_STATE_TTL_SECONDS", 600)?,
        })
    }

    /// 프로바이더의 클라이언트 자격 증명 (미설정이면 None)
    pub fn client(&self, provider: OAuthProvider) -> Option<&OAuthClientConfig> {
        match provider {
            OAuthProvider::Google => self.google.as_ref(),
            OAuthProvider::Facebook => self.facebook.as_ref(),
        }
    }

    pub fn is_enabled(&self, provider: OAuthProvider) -> bool {
        self.client(provider).is_some()
    }

    /// 프로바이더가 인가 코드를 돌려보낼 절대 URL
    pub fn callback_url(&self, provider: OAuthProvider) -> String {
        format!("{}{}", self.public_base_url, provider.callback_path())
    }

    pub fn enabled_providers(&self) -> Vec<OAuthProvider> {
        OAuthProvider::ALL
            .into_iter()
            .filter(|provider| self.is_enabled(*provider))
            .collect()
    }
}

/// Pusher Beams 푸시 알림 설정
#[derive(Clone)]
pub struct PushConfig {
    pub instance_id: String,
    pub secret_key: String,
    /// 알림을 구독하는 interest 이름
    pub interest: String,
}

impl PushConfig {
    /// 인스턴스 ID와 시크릿 키가 없으면 알림 발송을 끕니다.
    pub fn from_lookup(lookup: EnvLookup) -> Option<Self> {
        let instance_id = lookup_opt(lookup, "PUSHER_INSTANCE_ID")?;
        let secret_key = lookup_opt(lookup, "PUSHER_SECRET_KEY")?;

        Some(Self {
            instance_id,
            secret_key,
            interest: lookup_or(lookup, "PUSH_INTEREST", "secret"),
        })
    }

    /// interest 대상 publish 엔드포인트
    pub fn publish_url(&self) -> String {
        format!(
            "https://{0}.pushnotifications.pusher.com/publish_api/v1/instances/{0}/publishes/interests",
            self.instance_id
        )
    }
}

impl fmt::Debug for PushConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushConfig")
            .field("instance_id", &self.instance_id)
            .field("secret_key", &"***")
            .field("interest", &self.interest)
            .finish()
    }
}

/// 세션이 어떤 방식의 로그인으로 만들어졌는지 나타냅니다.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    /// 사용자명/패스워드 로그인
    Local,
    /// Google OAuth 2.0
    Google,
    /// Facebook Login
    Facebook,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// ```rust,ignore
    /// let provider = AuthProvider::from_str("google")?;
    /// assert_eq!(provider, AuthProvider::Google);
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

impl From<OAuthProvider> for AuthProvider {
    fn from(provider: OAuthProvider) -> Self {
        match provider {
            OAuthProvider::Google => AuthProvider::Google,
            OAuthProvider::Facebook => AuthProvider::Facebook,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("facebook").unwrap(), AuthProvider::Facebook);
        assert!(AuthProvider::from_str("twitter").is_err());
    }

    #[test]
    fn test_auth_provider_roundtrip() {
        for provider_str in ["local", "google", "facebook"] {
            let provider = AuthProvider::from_str(provider_str).unwrap();
            assert_eq!(provider.as_str(), provider_str);
        }
    }

    #[test]
    fn test_provider_enabled_only_with_both_credentials() {
        let lookup = lookup_from(&[
            ("GOOGLE_CLIENT_ID", "google-id"),
            ("GOOGLE_CLIENT_SECRET", "google-secret"),
            ("FACEBOOK_CLIENT_ID", "facebook-id"),
        ]);
        let config = OAuthConfig::from_lookup(&lookup).unwrap();

        assert!(config.is_enabled(OAuthProvider::Google));
        assert!(!config.is_enabled(OAuthProvider::Facebook));
        assert_eq!(config.enabled_providers(), vec![OAuthProvider::Google]);
        assert_eq!(config.state_ttl_seconds, 600);
    }

    #[test]
    fn test_callback_url_uses_public_base() {
        let lookup = lookup_from(&[("PUBLIC_BASE_URL", "https://secrets.example.com/")]);
        let config = OAuthConfig::from_lookup(&lookup).unwrap();

        assert_eq!(
            config.callback_url(OAuthProvider::Google),
            "https://secrets.example.com/auth/google/secrets"
        );
        assert_eq!(
            config.callback_url(OAuthProvider::Facebook),
            "https://secrets.example.com/auth/facebook/secrets"
        );
    }

    #[test]
    fn test_push_config_requires_instance_and_key() {
        assert!(PushConfig::from_lookup(&lookup_from(&[("PUSHER_INSTANCE_ID", "abc")])).is_none());

        let config = PushConfig::from_lookup(&lookup_from(&[
            ("PUSHER_INSTANCE_ID", "abc"),
            ("PUSHER_SECRET_KEY", "beams-secret-key"),
        ]))
        .unwrap();
        assert_eq!(config.interest, "secret");
        assert_eq!(
            config.publish_url(),
            "https://abc.pushnotifications.pusher.com/publish_api/v1/instances/abc/publishes/interests"
        );
        assert!(!format!("{:?}", config).contains("beams-secret-key"));
    }
}
