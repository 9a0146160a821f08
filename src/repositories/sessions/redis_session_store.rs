//! # Redis 세션 저장소

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::caching::redis::RedisClient;
use crate::domain::oauth::OAuthProvider;
use crate::domain::session::SessionPrincipal;
use crate::errors::AppResult;
use crate::repositories::sessions::session_store::{oauth_state_key, session_key, SessionStore};

pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionPrincipal>> {
        self.redis.get(&session_key(session_id)).await
    }

    async fn save(&self, session_id: &str, principal: &SessionPrincipal, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&session_key(session_id), principal, ttl_seconds)
            .await?;
        debug!("세션 저장: 사용자 {}", principal.user_id);
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.redis.del(&session_key(session_id)).await
    }

    async fn remember_oauth_state(&self, state: &str, provider: OAuthProvider, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&oauth_state_key(state), &provider, ttl_seconds)
            .await
    }

    async fn consume_oauth_state(&self, state: &str) -> AppResult<Option<OAuthProvider>> {
        self.redis.take(&oauth_state_key(state)).await
    }
}
