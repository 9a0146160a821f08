//! # 메모리 세션 저장소
//!
//! 만료 시각을 함께 저장하고, 읽을 때 지난 항목은 없는 것으로 취급합니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::oauth::OAuthProvider;
use crate::domain::session::SessionPrincipal;
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::session_store::{oauth_state_key, session_key, SessionStore};

#[derive(Clone)]
enum Entry {
    Session(SessionPrincipal),
    OAuthState(OAuthProvider),
}

#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, (Entry, Instant)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 만료되지 않은 세션 레코드가 있는지
    pub fn has_session(&self, session_id: &str) -> AppResult<bool> {
        let mut entries = self.lock()?;
        Ok(matches!(live_entry(&mut entries, &session_key(session_id)), Some(Entry::Session(_))))
    }

    /// 만료되지 않은 세션 레코드 수
    pub fn session_count(&self) -> AppResult<usize> {
        let now = Instant::now();
        Ok(self
            .lock()?
            .values()
            .filter(|(entry, expires_at)| matches!(entry, Entry::Session(_)) && *expires_at > now)
            .count())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, (Entry, Instant)>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::InternalError("세션 저장소 락이 오염되었습니다".to_string()))
    }

    /// 쓰기마다 만료된 항목을 함께 정리합니다. 콜백이 오지 않은 OAuth state도 여기서 지워집니다.
    fn insert(&self, key: String, entry: Entry, ttl_seconds: u64) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        entries.insert(key, (entry, now + Duration::from_secs(ttl_seconds)));
        Ok(())
    }
}

/// 만료된 항목은 지우고 None
fn live_entry(entries: &mut HashMap<String, (Entry, Instant)>, key: &str) -> Option<Entry> {
    match entries.get(key) {
        Some((entry, expires_at)) if *expires_at > Instant::now() => Some(entry.clone()),
        Some(_) => {
            entries.remove(key);
            None
        }
        None => None,
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionPrincipal>> {
        let mut entries = self.lock()?;
        match live_entry(&mut entries, &session_key(session_id)) {
            Some(Entry::Session(principal)) => Ok(Some(principal)),
            _ => Ok(None),
        }
    }

    async fn save(&self, session_id: &str, principal: &SessionPrincipal, ttl_seconds: u64) -> AppResult<()> {
        self.insert(session_key(session_id), Entry::Session(principal.clone()), ttl_seconds)
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.lock()?.remove(&session_key(session_id));
        Ok(())
    }

    async fn remember_oauth_state(&self, state: &str, provider: OAuthProvider, ttl_seconds: u64) -> AppResult<()> {
        self.insert(oauth_state_key(state), Entry::OAuthState(provider), ttl_seconds)
    }

    async fn consume_oauth_state(&self, state: &str) -> AppResult<Option<OAuthProvider>> {
        let mut entries = self.lock()?;
        let key = oauth_state_key(state);
        let found = live_entry(&mut entries, &key);
        entries.remove(&key);

        match found {
            Some(Entry::OAuthState(provider)) => Ok(Some(provider)),
            _ => Ok(None),
        }
    }
}
