//! # Application State
//!
//! 시작 시점에 한 번 조립되는 컴포넌트 묶음입니다.
//! `web::Data<AppState>`로 모든 워커에 공유되며, 각 필드는 `Arc`라서
//! 복제 비용이 포인터 복사 수준입니다.
//!
//! ```text
//! AppConfig ─┬─► IdentityService ◄── UserRepository (Mongo | Memory)
//!            ├─► SessionManager  ◄── SessionStore   (Redis | Memory)
//!            ├─► CredentialReconciler
//!            ├─► OAuthFlow       ◄── OAuthGateway
//!            └─► NotificationDispatcher ◄── PushPublisher (옵션)
//! ```

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserRepository;
use crate::services::auth::{CredentialReconciler, OAuthFlow, OAuthGateway, SessionManager};
use crate::services::notifications::{NotificationDispatcher, PushPublisher};
use crate::services::users::IdentityService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<IdentityService>,
    pub sessions: Arc<SessionManager>,
    pub reconciler: Arc<CredentialReconciler>,
    pub oauth: Arc<OAuthFlow>,
    pub notifications: Arc<NotificationDispatcher>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        user_repo: Arc<dyn UserRepository>,
        session_store: Arc<dyn SessionStore>,
        gateway: Arc<dyn OAuthGateway>,
        publisher: Option<Arc<dyn PushPublisher>>,
    ) -> Self {
        let identity = Arc::new(IdentityService::new(user_repo, config.password.clone()));
        let sessions = Arc::new(SessionManager::new(
            session_store.clone(),
            identity.clone(),
            config.session.clone(),
        ));
        let reconciler = Arc::new(CredentialReconciler::new(identity.clone(), sessions.clone()));
        let oauth = Arc::new(OAuthFlow::new(gateway, session_store, config.oauth.clone()));

        let interest = config
            .push
            .as_ref()
            .map(|push| push.interest.clone())
            .unwrap_or_else(|| "secret".to_string());
        let notifications = Arc::new(NotificationDispatcher::new(
            publisher,
            interest,
            config.public_url("/secrets"),
        ));

        Self {
            config: Arc::new(config),
            identity,
            sessions,
            reconciler,
            oauth,
            notifications,
        }
    }
}
