//! # OAuth 게이트웨이
//!
//! 프로바이더와 주고받는 HTTP 호출을 담당합니다.
//!
//! ```text
//! 1. authorize_url     → 동의 화면 URL (client_id, redirect_uri, scope, state)
//! 2. 프로바이더         → /auth/{provider}/secrets?code=...&state=...
//! 3. exchange_code     → POST token_endpoint (authorization_code)
//!                      → GET profile_endpoint (Bearer access_token)
//!                      → ExternalProfile
//! ```
//!
//! 테스트에서는 네트워크 없이 흐름을 검증할 수 있도록 trait 뒤에 둡니다.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::config::{OAuthClientConfig, OAuthConfig};
use crate::domain::oauth::{ExternalProfile, OAuthProvider, OAuthTokenResponse};
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait OAuthGateway: Send + Sync {
    /// 사용자를 보낼 동의 화면 URL
    fn authorize_url(&self, provider: OAuthProvider, state: &str) -> AppResult<String>;

    /// 인가 코드를 프로필로 바꿉니다.
    async fn exchange_code(&self, provider: OAuthProvider, code: &str) -> AppResult<ExternalProfile>;
}

/// reqwest 기반 게이트웨이
pub struct HttpOAuthGateway {
    http: reqwest::Client,
    config: OAuthConfig,
}

impl HttpOAuthGateway {
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn client(&self, provider: OAuthProvider) -> AppResult<&OAuthClientConfig> {
        self.config.client(provider).ok_or_else(|| {
            AppError::ConfigurationError(format!("{} OAuth 클라이언트가 설정되지 않았습니다", provider.label()))
        })
    }

    async fn request_token(&self, provider: OAuthProvider, code: &str) -> AppResult<OAuthTokenResponse> {
        let client = self.client(provider)?;
        let redirect_uri = self.config.callback_url(provider);

        let params = [
            ("code", code),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(provider.token_endpoint())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", provider.label(), e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패 ({}): {}",
                provider.label(),
                status,
                error_text
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", provider.label(), e)))
    }

    async fn fetch_profile(&self, provider: OAuthProvider, access_token: &str) -> AppResult<Value> {
        let response = self
            .http
            .get(provider.profile_endpoint())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 프로필 요청 실패: {}", provider.label(), e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "{} 프로필 조회 실패: {}",
                provider.label(),
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 프로필 응답 파싱 실패: {}", provider.label(), e)))
    }
}

#[async_trait]
impl OAuthGateway for HttpOAuthGateway {
    fn authorize_url(&self, provider: OAuthProvider, state: &str) -> AppResult<String> {
        let client = self.client(provider)?;
        Ok(build_authorize_url(
            provider,
            &client.client_id,
            &self.config.callback_url(provider),
            state,
        ))
    }

    async fn exchange_code(&self, provider: OAuthProvider, code: &str) -> AppResult<ExternalProfile> {
        let token = self.request_token(provider, code).await?;
        debug!("{} 액세스 토큰 수신 (type={:?})", provider.label(), token.token_type);

        let profile = self.fetch_profile(provider, &token.access_token).await?;
        ExternalProfile::from_profile_json(provider, &profile)
    }
}

fn build_authorize_url(provider: OAuthProvider, client_id: &str, redirect_uri: &str, state: &str) -> String {
    let mut params = vec![
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
    ];
    if let Some(scope) = provider.scope() {
        params.push(("scope", scope));
    }
    params.push(("state", state));

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", provider.authorize_endpoint(), query_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn gateway() -> HttpOAuthGateway {
        let map: HashMap<&str, &str> = HashMap::from([
            ("PUBLIC_BASE_URL", "http://localhost:5000/"),
            ("GOOGLE_CLIENT_ID", "google-id"),
            ("GOOGLE_CLIENT_SECRET", "google-secret"),
        ]);
        let lookup = |key: &str| map.get(key).map(|v| v.to_string());
        HttpOAuthGateway::new(OAuthConfig::from_lookup(&lookup).unwrap())
    }

    #[test]
    fn test_google_authorize_url() {
        let url = gateway().authorize_url(OAuthProvider::Google, "abc123").unwrap();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=google-id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A5000%2Fauth%2Fgoogle%2Fsecrets"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=profile"));
        assert!(url.contains("state=abc123"));
        assert!(!url.contains("google-secret"));
    }

    #[test]
    fn test_facebook_url_has_no_scope() {
        let url = build_authorize_url(
            OAuthProvider::Facebook,
            "fb-id",
            "http://localhost:5000/auth/facebook/secrets",
            "s",
        );

        assert!(url.starts_with("https://www.facebook.com/"));
        assert!(!url.contains("scope="));
    }

    #[test]
    fn test_unconfigured_provider_is_configuration_error() {
        let result = gateway().authorize_url(OAuthProvider::Facebook, "s");

        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
