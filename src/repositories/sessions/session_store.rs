//! # 세션 저장소 인터페이스

use async_trait::async_trait;

use crate::domain::oauth::OAuthProvider;
use crate::domain::session::SessionPrincipal;
use crate::errors::AppResult;

/// 서버 측 세션 레코드와 대기 중인 OAuth state를 보관합니다.
///
/// 세션 레코드는 로그인에 성공했을 때만 만들어집니다.
/// OAuth state는 별도 키 공간에 두어 익명 방문자에게 세션을 만들지 않습니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionPrincipal>>;

    async fn save(&self, session_id: &str, principal: &SessionPrincipal, ttl_seconds: u64) -> AppResult<()>;

    /// 없는 세션을 지워도 성공으로 취급합니다.
    async fn destroy(&self, session_id: &str) -> AppResult<()>;

    async fn remember_oauth_state(&self, state: &str, provider: OAuthProvider, ttl_seconds: u64) -> AppResult<()>;

    /// state를 꺼내면서 지웁니다. 같은 state는 한 번만 성공합니다.
    async fn consume_oauth_state(&self, state: &str) -> AppResult<Option<OAuthProvider>>;
}

pub(crate) fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}

pub(crate) fn oauth_state_key(state: &str) -> String {
    format!("oauth_state:{}", state)
}
