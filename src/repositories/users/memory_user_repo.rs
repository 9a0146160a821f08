//! # 메모리 사용자 리포지토리
//!
//! `STORE_BACKEND=memory`로 실행하거나 테스트할 때 쓰는 구현입니다.
//! 모든 변경은 하나의 쓰기 락 안에서 끝나므로 조회-후-생성이 원자적입니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::User;
use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
    unique_usernames: bool,
}

impl MemoryUserRepository {
    pub fn new(unique_usernames: bool) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            unique_usernames,
        }
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 락이 오염되었습니다".to_string()))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if self.unique_usernames && user.username.is_some()
            && users.iter().any(|existing| existing.username == user.username)
        {
            return Err(AppError::ConflictError(
                "A user with the given username is already registered".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.read()?.iter().find(|user| user.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>> {
        Ok(self
            .read()?
            .iter()
            .filter(|user| user.username.as_deref() == Some(username))
            .cloned()
            .collect())
    }

    async fn find_or_create_by_provider(&self, provider: OAuthProvider, subject_id: &str) -> AppResult<User> {
        let mut users = self.write()?;

        if let Some(existing) = users
            .iter()
            .find(|user| user.provider_subject(provider) == Some(subject_id))
        {
            return Ok(existing.clone());
        }

        let mut user = User::new_oauth(provider, subject_id.to_string());
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all_with_secret(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.iter().filter(|user| user.has_secret()).cloned().collect())
    }

    async fn set_secret(&self, id: &ObjectId, secret: &str) -> AppResult<bool> {
        let mut users = self.write()?;

        match users.iter_mut().find(|user| user.id.as_ref() == Some(id)) {
            Some(user) => {
                user.secret = Some(secret.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_find_or_create_is_idempotent() {
        let repo = MemoryUserRepository::new(false);

        let first = repo.find_or_create_by_provider(OAuthProvider::Google, "g-1").await.unwrap();
        let second = repo.find_or_create_by_provider(OAuthProvider::Google, "g-1").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_same_subject_on_different_providers_is_two_users() {
        let repo = MemoryUserRepository::new(false);

        let google = repo.find_or_create_by_provider(OAuthProvider::Google, "42").await.unwrap();
        let facebook = repo.find_or_create_by_provider(OAuthProvider::Facebook, "42").await.unwrap();

        assert_ne!(google.id, facebook.id);
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_concurrent_find_or_create_creates_one_record() {
        let repo = Arc::new(MemoryUserRepository::new(false));

        let calls = (0..16).map(|_| {
            let repo = repo.clone();
            async move { repo.find_or_create_by_provider(OAuthProvider::Facebook, "fb-7").await }
        });
        let results = futures_util::future::join_all(calls).await;

        let first_id = results[0].as_ref().unwrap().id;
        assert!(results.iter().all(|r| r.as_ref().unwrap().id == first_id));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_unique_usernames_rejects_second_insert() {
        let repo = MemoryUserRepository::new(true);
        repo.insert(User::new_local("carol".to_string(), "h1".to_string())).await.unwrap();

        let result = repo.insert(User::new_local("carol".to_string(), "h2".to_string())).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_set_secret_overwrites_and_listing_skips_empty() {
        let repo = MemoryUserRepository::new(false);
        let a = repo.insert(User::new_local("a".to_string(), "h".to_string())).await.unwrap();
        let _b = repo.insert(User::new_local("b".to_string(), "h".to_string())).await.unwrap();
        let a_id = a.id.unwrap();

        assert!(repo.set_secret(&a_id, "x").await.unwrap());
        assert!(repo.set_secret(&a_id, "y").await.unwrap());

        let listed = repo.find_all_with_secret().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].secret.as_deref(), Some("y"));

        assert!(!repo.set_secret(&ObjectId::new(), "z").await.unwrap());
    }
}
