//! # 세션 매니저
//!
//! 인증된 사용자를 서버 측 세션 레코드와 서명된 쿠키로 바꾸고,
//! 다음 요청에서 그 쿠키를 다시 사용자로 되돌립니다.
//!
//! ## 쿠키
//!
//! 쿠키에는 무작위 세션 ID(uuid v4)만 들어갑니다. 값은 `SESSION_SECRET`에서
//! SHA-512로 유도한 키로 서명하므로 변조된 쿠키는 익명 요청으로 처리됩니다.
//!
//! ## 세션 레코드
//!
//! 로그인이 성공한 시점에만 저장합니다. 레코드에는 사용자 ID만 있고,
//! 요청마다 신원 저장소에서 사용자를 다시 읽습니다. 사용자를 찾을 수 없으면
//! 오류가 아니라 익명으로 취급합니다.

use std::sync::Arc;

use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, CookieJar, Key, SameSite};
use log::{debug, info, warn};
use sha2::{Digest, Sha512};
use uuid::Uuid;

use crate::config::{AuthProvider, SessionConfig};
use crate::domain::User;
use crate::domain::auth::CurrentUser;
use crate::domain::session::SessionPrincipal;
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionStore;
use crate::services::users::IdentityService;

/// 로그인 직후 만들어진 세션
#[derive(Debug)]
pub struct EstablishedSession {
    pub user: User,
    pub session_id: String,
    /// 응답에 붙일 서명된 세션 쿠키
    pub cookie: Cookie<'static>,
}

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    identity: Arc<IdentityService>,
    config: SessionConfig,
    key: Key,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, identity: Arc<IdentityService>, config: SessionConfig) -> Self {
        let key = derive_cookie_key(&config.secret);
        Self { store, identity, config, key }
    }

    /// 세션에 기록할 최소 정보. 사용자 ID가 없으면 저장되지 않은 사용자입니다.
    pub fn serialize(&self, user: &User, provider: AuthProvider) -> AppResult<SessionPrincipal> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자로 세션을 만들 수 없습니다".to_string())
        })?;

        Ok(SessionPrincipal::new(user_id, provider))
    }

    /// 세션 주체를 사용자로 되돌립니다. 사용자가 사라졌으면 None
    pub async fn deserialize(&self, principal: &SessionPrincipal) -> AppResult<Option<User>> {
        match self.identity.find_by_id(&principal.user_id).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::NotFound(_)) => {
                debug!("세션 사용자 없음, 익명으로 처리");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// 새 세션을 만듭니다.
    ///
    /// 매번 새 세션 ID를 발급하고, 요청에 이전 세션이 있었다면 지웁니다.
    pub async fn establish(
        &self,
        user: User,
        provider: AuthProvider,
        previous_session_id: Option<&str>,
    ) -> AppResult<EstablishedSession> {
        let principal = self.serialize(&user, provider)?;

        if let Some(previous) = previous_session_id {
            self.store.destroy(previous).await?;
        }

        let session_id = Uuid::new_v4().to_string();
        self.store.save(&session_id, &principal, self.config.ttl_seconds).await?;

        info!("🔐 세션 생성: user={} provider={}", principal.user_id, provider.as_str());

        let cookie = self.signed_cookie(&session_id);
        Ok(EstablishedSession { user, session_id, cookie })
    }

    /// 요청 쿠키에서 서명이 유효한 세션 ID를 꺼냅니다.
    pub fn session_id(&self, req: &HttpRequest) -> Option<String> {
        let cookie = req.cookie(&self.config.cookie_name)?;

        let mut jar = CookieJar::new();
        jar.add_original(cookie);

        match jar.signed(&self.key).get(&self.config.cookie_name) {
            Some(verified) => Some(verified.value().to_string()),
            None => {
                warn!("⚠️ 서명이 맞지 않는 세션 쿠키");
                None
            }
        }
    }

    /// 현재 요청의 사용자를 해석합니다.
    ///
    /// 저장소 오류도 로그만 남기고 익명으로 처리합니다.
    pub async fn resolve(&self, req: &HttpRequest) -> Option<CurrentUser> {
        let session_id = self.session_id(req)?;

        match self.resolve_session(&session_id).await {
            Ok(Some(user)) => Some(CurrentUser { user, session_id }),
            Ok(None) => None,
            Err(e) => {
                log::error!("❌ 세션 해석 실패: {}", e);
                None
            }
        }
    }

    async fn resolve_session(&self, session_id: &str) -> AppResult<Option<User>> {
        match self.store.load(session_id).await? {
            Some(principal) => self.deserialize(&principal).await,
            None => Ok(None),
        }
    }

    /// 현재 세션을 지우고 쿠키를 만료시키는 쿠키를 돌려줍니다.
    pub async fn destroy(&self, req: &HttpRequest) -> Cookie<'static> {
        if let Some(session_id) = self.session_id(req) {
            match self.store.destroy(&session_id).await {
                Ok(()) => info!("👋 세션 종료"),
                Err(e) => log::error!("❌ 세션 삭제 실패: {}", e),
            }
        }

        self.removal_cookie()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.config.cookie_name.clone(), "");
        cookie.set_path("/");
        cookie.make_removal();
        cookie
    }

    fn signed_cookie(&self, session_id: &str) -> Cookie<'static> {
        let cookie = Cookie::build(self.config.cookie_name.clone(), session_id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .finish();

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie.clone());

        jar.get(&self.config.cookie_name).cloned().unwrap_or(cookie)
    }
}

/// 서버 비밀값에서 64바이트 쿠키 서명 키를 유도합니다.
fn derive_cookie_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}
