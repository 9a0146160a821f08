//! # 신원 서비스
//!
//! 사용자 레코드에 대한 모든 규칙을 담당합니다.
//!
//! - 로컬 가입: 사용자명 중복 확인 후 bcrypt 해시로 저장
//! - 로컬 인증: 같은 사용자명의 레코드를 모두 확인해 해시가 맞는 레코드를 고름
//! - OAuth: 프로바이더 subject id로 조회하거나 생성
//! - 비밀글: 공백 제거 후 길이 제한을 확인하고 덮어쓰기
//!
//! bcrypt 해싱과 검증은 CPU를 오래 쓰므로 `web::block`으로 워커 스레드 밖에서 실행합니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;

use crate::config::PasswordConfig;
use crate::domain::User;
use crate::domain::dto::SECRET_MAX_CHARS;
use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::validate_required_string;

pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user with the given username is already registered";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Password or username is incorrect";

pub struct IdentityService {
    user_repo: Arc<dyn UserRepository>,
    password: PasswordConfig,
}

impl IdentityService {
    pub fn new(user_repo: Arc<dyn UserRepository>, password: PasswordConfig) -> Self {
        Self { user_repo, password }
    }

    /// 로컬 사용자를 만듭니다.
    ///
    /// 같은 사용자명이 이미 있으면 ConflictError. 동시에 들어온 두 가입 요청은
    /// 저장소의 unique 인덱스가 꺼져 있으면 둘 다 성공할 수 있습니다.
    pub async fn create_local(&self, username: &str, raw_password: &str) -> AppResult<User> {
        let username = validate_required_string(username, "Username")?;
        if raw_password.is_empty() {
            return Err(AppError::ValidationError("Password is required".to_string()));
        }

        if !self.user_repo.find_by_username(&username).await?.is_empty() {
            warn!("⚠️ 이미 등록된 사용자명으로 가입 시도: {}", username);
            return Err(AppError::ConflictError(DUPLICATE_USERNAME_MESSAGE.to_string()));
        }

        let hash_start = Instant::now();
        let password_hash = hash_password(raw_password.to_string(), self.password.bcrypt_cost).await?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.user_repo.insert(User::new_local(username, password_hash)).await?;
        info!("✅ 로컬 사용자 생성: {}", user.id_string().unwrap_or_default());

        Ok(user)
    }

    /// 사용자명과 비밀번호로 인증합니다.
    ///
    /// 같은 사용자명의 레코드가 여러 개면 해시가 일치하는 레코드를 돌려줍니다.
    /// 사용자가 없을 때와 비밀번호가 틀렸을 때 같은 메시지를 씁니다.
    pub async fn verify_local(&self, username: &str, raw_password: &str) -> AppResult<User> {
        let username = username.trim();
        let candidates = self.user_repo.find_by_username(username).await?;

        for candidate in candidates.into_iter().filter(User::can_authenticate_with_password) {
            let stored_hash = candidate.password_hash.clone().unwrap_or_default();

            if verify_password(raw_password.to_string(), stored_hash).await? {
                debug!("로컬 인증 성공: {}", candidate.id_string().unwrap_or_default());
                return Ok(candidate);
            }
        }

        warn!("⚠️ 로컬 로그인 실패: {}", username);
        Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()))
    }

    /// 프로바이더 subject id로 사용자를 찾고, 없으면 만듭니다.
    pub async fn find_or_create_by_provider(&self, provider: OAuthProvider, subject_id: &str) -> AppResult<User> {
        let subject_id = validate_required_string(subject_id, "subject id")?;
        let user = self.user_repo.find_or_create_by_provider(provider, &subject_id).await?;

        debug!("{} 사용자 확인: {}", provider.label(), user.id_string().unwrap_or_default());
        Ok(user)
    }

    /// ID 문자열로 사용자를 조회합니다. 형식이 잘못된 ID도 NotFound입니다.
    pub async fn find_by_id(&self, id: &str) -> AppResult<User> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound("User not found".to_string()))?;

        self.user_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn find_all_with_secret(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all_with_secret().await
    }

    /// 사용자의 비밀글을 덮어씁니다.
    pub async fn set_secret(&self, user_id: &ObjectId, text: &str) -> AppResult<()> {
        let secret = validate_required_string(text, "Secret")?;
        if secret.chars().count() > SECRET_MAX_CHARS {
            return Err(AppError::ValidationError(format!(
                "Secret must be between 1 and {} characters",
                SECRET_MAX_CHARS
            )));
        }

        if !self.user_repo.set_secret(user_id, &secret).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        info!("📝 비밀글 저장: {}", user_id);
        Ok(())
    }
}

async fn hash_password(raw_password: String, cost: u32) -> AppResult<String> {
    web::block(move || bcrypt::hash(raw_password, cost))
        .await
        .context("비밀번호 해싱 작업 실패")?
        .context("비밀번호 해싱 실패")
}

async fn verify_password(raw_password: String, stored_hash: String) -> AppResult<bool> {
    web::block(move || bcrypt::verify(raw_password, &stored_hash))
        .await
        .context("비밀번호 검증 작업 실패")?
        .context("비밀번호 검증 실패")
}
