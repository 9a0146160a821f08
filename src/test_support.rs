//! 테스트 공용 구성 요소
//!
//! 메모리 저장소, 가짜 OAuth 게이트웨이, 발송 내용을 기록하는 퍼블리셔로
//! 네트워크 없이 전체 앱을 조립합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{AppConfig, OAuthConfig};
use crate::core::AppState;
use crate::domain::notification::PublishRequest;
use crate::domain::oauth::{ExternalProfile, OAuthProvider};
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::MemorySessionStore;
use crate::repositories::users::MemoryUserRepository;
use crate::services::auth::OAuthGateway;
use crate::services::notifications::PushPublisher;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// 두 프로바이더와 푸시 알림이 모두 켜진 테스트 설정
pub(crate) fn test_config() -> AppConfig {
    let lookup = lookup_from(&[
        ("ENVIRONMENT", "test"),
        ("STORE_BACKEND", "memory"),
        ("SESSION_SECRET", "test-session-secret"),
        ("PUBLIC_BASE_URL", "http://localhost:5000"),
        ("GOOGLE_CLIENT_ID", "google-id"),
        ("GOOGLE_CLIENT_SECRET", "google-secret"),
        ("FACEBOOK_CLIENT_ID", "facebook-id"),
        ("FACEBOOK_CLIENT_SECRET", "facebook-secret"),
        ("PUSHER_INSTANCE_ID", "instance"),
        ("PUSHER_SECRET_KEY", "beams-key"),
    ]);

    AppConfig::from_lookup(&lookup).unwrap()
}

pub(crate) fn oauth_config(google: bool, facebook: bool) -> OAuthConfig {
    let mut pairs = vec![("PUBLIC_BASE_URL", "http://localhost:5000")];
    if google {
        pairs.extend([("GOOGLE_CLIENT_ID", "google-id"), ("GOOGLE_CLIENT_SECRET", "google-secret")]);
    }
    if facebook {
        pairs.extend([("FACEBOOK_CLIENT_ID", "facebook-id"), ("FACEBOOK_CLIENT_SECRET", "facebook-secret")]);
    }

    OAuthConfig::from_lookup(&lookup_from(&pairs)).unwrap()
}

/// 미리 등록한 code에 대해서만 프로필을 돌려주는 게이트웨이
#[derive(Default)]
pub(crate) struct FakeOAuthGateway {
    codes: Mutex<HashMap<String, ExternalProfile>>,
}

impl FakeOAuthGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register_code(&self, code: &str, profile: ExternalProfile) {
        self.codes.lock().unwrap().insert(code.to_string(), profile);
    }
}

#[async_trait]
impl OAuthGateway for FakeOAuthGateway {
    fn authorize_url(&self, provider: OAuthProvider, state: &str) -> AppResult<String> {
        Ok(format!("https://consent.test/{}?state={}", provider.as_str(), state))
    }

    async fn exchange_code(&self, provider: OAuthProvider, code: &str) -> AppResult<ExternalProfile> {
        self.codes
            .lock()
            .unwrap()
            .get(code)
            .filter(|profile| profile.provider == provider)
            .cloned()
            .ok_or_else(|| AppError::ExternalServiceError("unknown code".to_string()))
    }
}

/// 요청을 기록하는 퍼블리셔
#[derive(Default)]
pub(crate) struct RecordingPublisher {
    requests: Mutex<Vec<PublishRequest>>,
    fail: bool,
}

impl RecordingPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 기록은 하되 항상 실패를 돌려줍니다.
    pub(crate) fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub(crate) fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushPublisher for RecordingPublisher {
    async fn publish(&self, request: &PublishRequest) -> AppResult<String> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());

        if self.fail {
            return Err(AppError::ExternalServiceError("beams unavailable".to_string()));
        }
        Ok(format!("pubid-{}", requests.len()))
    }
}

/// 테스트에서 직접 들여다볼 구성 요소
pub(crate) struct TestFixtures {
    pub users: Arc<MemoryUserRepository>,
    pub sessions: Arc<MemorySessionStore>,
    pub gateway: Arc<FakeOAuthGateway>,
    pub publisher: Arc<RecordingPublisher>,
}

pub(crate) fn test_state() -> (AppState, TestFixtures) {
    let fixtures = TestFixtures {
        users: Arc::new(MemoryUserRepository::new(false)),
        sessions: Arc::new(MemorySessionStore::new()),
        gateway: Arc::new(FakeOAuthGateway::new()),
        publisher: Arc::new(RecordingPublisher::new()),
    };

    let state = AppState::new(
        test_config(),
        fixtures.users.clone(),
        fixtures.sessions.clone(),
        fixtures.gateway.clone(),
        Some(fixtures.publisher.clone()),
    );

    (state, fixtures)
}
