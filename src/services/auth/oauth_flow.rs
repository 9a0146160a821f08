//! # OAuth 로그인 흐름
//!
//! state 발급과 콜백 검증을 담당합니다. state는 세션 저장소의 별도 키 공간에
//! 짧은 TTL로 저장되고, 콜백에서 한 번만 꺼낼 수 있습니다.
//! 익명 방문자가 동의 화면으로 이동해도 세션 레코드는 만들어지지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::config::OAuthConfig;
use crate::domain::dto::OAuthCallbackQuery;
use crate::domain::oauth::{ExternalProfile, OAuthProvider};
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionStore;
use crate::services::auth::OAuthGateway;

pub struct OAuthFlow {
    gateway: Arc<dyn OAuthGateway>,
    store: Arc<dyn SessionStore>,
    config: OAuthConfig,
}

impl OAuthFlow {
    pub fn new(gateway: Arc<dyn OAuthGateway>, store: Arc<dyn SessionStore>, config: OAuthConfig) -> Self {
        Self { gateway, store, config }
    }

    pub fn is_enabled(&self, provider: OAuthProvider) -> bool {
        self.config.is_enabled(provider)
    }

    pub fn enabled_providers(&self) -> Vec<OAuthProvider> {
        self.config.enabled_providers()
    }

    /// state를 발급하고 동의 화면 URL을 돌려줍니다.
    pub async fn begin(&self, provider: OAuthProvider) -> AppResult<String> {
        if !self.is_enabled(provider) {
            return Err(AppError::ConfigurationError(format!(
                "{} 로그인이 설정되지 않았습니다",
                provider.label()
            )));
        }

        let state = Uuid::new_v4().simple().to_string();
        self.store
            .remember_oauth_state(&state, provider, self.config.state_ttl_seconds)
            .await?;

        info!("➡️ {} 동의 화면으로 이동", provider.label());
        self.gateway.authorize_url(provider, &state)
    }

    /// 콜백 쿼리를 검증하고 외부 프로필을 얻습니다.
    ///
    /// 동의 거부, state 누락/불일치/만료, code 누락은 모두 AuthenticationError입니다.
    pub async fn complete(&self, provider: OAuthProvider, query: &OAuthCallbackQuery) -> AppResult<ExternalProfile> {
        if !self.is_enabled(provider) {
            return Err(AppError::ConfigurationError(format!(
                "{} 로그인이 설정되지 않았습니다",
                provider.label()
            )));
        }

        if let Some(error) = &query.error {
            warn!(
                "⚠️ {} 동의 거부: {} {}",
                provider.label(),
                error,
                query.error_description.as_deref().unwrap_or_default()
            );
            return Err(AppError::AuthenticationError("OAuth consent was denied".to_string()));
        }

        let state = query
            .state
            .as_deref()
            .ok_or_else(|| AppError::AuthenticationError("Missing OAuth state".to_string()))?;

        match self.store.consume_oauth_state(state).await? {
            Some(issued_for) if issued_for == provider => {}
            Some(issued_for) => {
                warn!("⚠️ state 프로바이더 불일치: 발급={} 콜백={}", issued_for.as_str(), provider.as_str());
                return Err(AppError::AuthenticationError("Invalid OAuth state".to_string()));
            }
            None => {
                warn!("⚠️ {} 콜백: 알 수 없거나 만료된 state", provider.label());
                return Err(AppError::AuthenticationError("Invalid OAuth state".to_string()));
            }
        }

        let code = query
            .code
            .as_deref()
            .ok_or_else(|| AppError::AuthenticationError("Missing authorization code".to_string()))?;

        self.gateway.exchange_code(provider, code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::sessions::MemorySessionStore;
    use crate::test_support::{oauth_config, FakeOAuthGateway};

    fn flow() -> (OAuthFlow, Arc<FakeOAuthGateway>) {
        let gateway = Arc::new(FakeOAuthGateway::new());
        let flow = OAuthFlow::new(gateway.clone(), Arc::new(MemorySessionStore::new()), oauth_config(true, false));
        (flow, gateway)
    }

    fn state_of(url: &str) -> String {
        url.split("state=").nth(1).unwrap_or_default().to_string()
    }

    fn callback(code: Option<&str>, state: Option<&str>) -> OAuthCallbackQuery {
        OAuthCallbackQuery {
            code: code.map(str::to_string),
            state: state.map(str::to_string),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_round_trip_yields_profile() {
        let (flow, gateway) = flow();
        gateway.register_code("code-1", ExternalProfile::new(OAuthProvider::Google, "g-100"));

        let url = flow.begin(OAuthProvider::Google).await.unwrap();
        let state = state_of(&url);
        let profile = flow
            .complete(OAuthProvider::Google, &callback(Some("code-1"), Some(&state)))
            .await
            .unwrap();

        assert_eq!(profile.subject_id, "g-100");
    }

    #[actix_web::test]
    async fn test_state_is_single_use() {
        let (flow, gateway) = flow();
        gateway.register_code("code-1", ExternalProfile::new(OAuthProvider::Google, "g-100"));

        let state = state_of(&flow.begin(OAuthProvider::Google).await.unwrap());
        let query = callback(Some("code-1"), Some(&state));

        assert!(flow.complete(OAuthProvider::Google, &query).await.is_ok());
        assert!(matches!(
            flow.complete(OAuthProvider::Google, &query).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_missing_or_unknown_state_is_rejected() {
        let (flow, _gateway) = flow();

        let missing = flow.complete(OAuthProvider::Google, &callback(Some("c"), None)).await;
        let unknown = flow.complete(OAuthProvider::Google, &callback(Some("c"), Some("forged"))).await;

        assert!(matches!(missing, Err(AppError::AuthenticationError(_))));
        assert!(matches!(unknown, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_denied_consent_is_rejected() {
        let (flow, _gateway) = flow();
        let query = OAuthCallbackQuery {
            error: Some("access_denied".to_string()),
            ..Default::default()
        };

        let result = flow.complete(OAuthProvider::Google, &query).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_disabled_provider_cannot_begin() {
        let (flow, _gateway) = flow();

        let result = flow.begin(OAuthProvider::Facebook).await;

        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
        assert_eq!(flow.enabled_providers(), vec![OAuthProvider::Google]);
    }
}
