//! # 자격 증명 조정기
//!
//! 세 가지 로그인 이벤트를 하나의 사용자 신원으로 정리하고 세션을 만듭니다.
//!
//! | 이벤트 | 신원 결정 | 실패 |
//! |--------|-----------|------|
//! | 로컬 가입 | `create_local` | ConflictError, ValidationError |
//! | 로컬 로그인 | `verify_local` (세션 전에 비밀번호 확인) | AuthenticationError |
//! | OAuth 콜백 | `find_or_create_by_provider` | 호출자가 `/login`으로 리다이렉트 |
//!
//! 프로바이더가 달라도 같은 사람으로 합치지 않습니다.

use std::sync::Arc;

use log::info;

use crate::config::AuthProvider;
use crate::domain::oauth::ExternalProfile;
use crate::errors::AppResult;
use crate::services::auth::{EstablishedSession, SessionManager};
use crate::services::users::IdentityService;

/// 로그인 이벤트
#[derive(Debug, Clone)]
pub enum LoginAttempt {
    Register { username: String, password: String },
    Login { username: String, password: String },
    /// 프로바이더 교환이 끝난 외부 프로필
    OAuth(ExternalProfile),
}

pub struct CredentialReconciler {
    identity: Arc<IdentityService>,
    sessions: Arc<SessionManager>,
}

impl CredentialReconciler {
    pub fn new(identity: Arc<IdentityService>, sessions: Arc<SessionManager>) -> Self {
        Self { identity, sessions }
    }

    /// 로그인 이벤트를 사용자로 확정하고 새 세션을 만듭니다.
    ///
    /// `previous_session`이 있으면 새 세션을 만들면서 지웁니다.
    pub async fn reconcile(
        &self,
        attempt: LoginAttempt,
        previous_session: Option<&str>,
    ) -> AppResult<EstablishedSession> {
        match attempt {
            LoginAttempt::Register { username, password } => {
                self.register(&username, &password, previous_session).await
            }
            LoginAttempt::Login { username, password } => {
                self.login(&username, &password, previous_session).await
            }
            LoginAttempt::OAuth(profile) => self.complete_oauth(profile, previous_session).await,
        }
    }

    /// 가입 후 바로 로그인 상태로 만듭니다.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        previous_session: Option<&str>,
    ) -> AppResult<EstablishedSession> {
        let user = self.identity.create_local(username, password).await?;
        info!("🆕 회원가입 완료: {}", user.id_string().unwrap_or_default());

        self.sessions.establish(user, AuthProvider::Local, previous_session).await
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        previous_session: Option<&str>,
    ) -> AppResult<EstablishedSession> {
        let user = self.identity.verify_local(username, password).await?;
        info!("✅ 로컬 로그인 성공: {}", user.id_string().unwrap_or_default());

        self.sessions.establish(user, AuthProvider::Local, previous_session).await
    }

    pub async fn complete_oauth(
        &self,
        profile: ExternalProfile,
        previous_session: Option<&str>,
    ) -> AppResult<EstablishedSession> {
        let user = self
            .identity
            .find_or_create_by_provider(profile.provider, &profile.subject_id)
            .await?;

        info!(
            "✅ {} 로그인 성공: {}",
            profile.provider.label(),
            user.id_string().unwrap_or_default()
        );

        self.sessions
            .establish(user, AuthProvider::from(profile.provider), previous_session)
            .await
    }
}
