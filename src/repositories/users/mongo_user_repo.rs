//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다.
//!
//! ## 인덱스
//!
//! | 필드 | 옵션 |
//! |------|------|
//! | `googleId` | unique, sparse |
//! | `facebookId` | unique, sparse |
//! | `username` | sparse, `USERNAME_UNIQUE_INDEX=true`일 때만 unique |
//! | `secret` | sparse |
//!
//! OAuth 사용자 조회/생성은 `find_one_and_update` + `$setOnInsert` + `upsert`
//! 한 번으로 처리합니다. 두 요청이 동시에 upsert하면 unique 인덱스 때문에
//! 한쪽이 E11000으로 실패하는데, 그때는 먼저 만들어진 문서를 다시 읽습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::User;
use crate::domain::oauth::OAuthProvider;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    db: Arc<Database>,
    /// username에 unique 인덱스를 만들지 여부
    unique_usernames: bool,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, unique_usernames: bool) -> Self {
        Self { db, unique_usernames }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(
                        "A user with the given username is already registered".to_string(),
                    )
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one이 ObjectId를 돌려주지 않았습니다".to_string())
        })?;
        user.id = Some(id);

        debug!("사용자 문서 생성: {}", id);
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>> {
        self.collection()
            .find(doc! { "username": username })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_or_create_by_provider(&self, provider: OAuthProvider, subject_id: &str) -> AppResult<User> {
        let mut filter = Document::new();
        filter.insert(provider.subject_field(), subject_id);

        let now = DateTime::now();
        let update = doc! {
            "$setOnInsert": { "created_at": now, "updated_at": now }
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        match self.collection()
            .find_one_and_update(filter.clone(), update)
            .with_options(options)
            .await
        {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::DatabaseError(
                "upsert 후 문서를 찾을 수 없습니다".to_string(),
            )),
            Err(e) if is_duplicate_key(&e) => {
                debug!("{} 사용자 동시 생성 감지, 기존 문서 재조회", provider.label());
                self.collection()
                    .find_one(filter)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?
                    .ok_or_else(|| AppError::DatabaseError(
                        "중복 키 충돌 후 문서를 찾을 수 없습니다".to_string(),
                    ))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn find_all_with_secret(&self) -> AppResult<Vec<User>> {
        self.collection()
            .find(doc! { "secret": { "$ne": Bson::Null } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn set_secret(&self, id: &ObjectId, secret: &str) -> AppResult<bool> {
        let result = self.collection()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let provider_indexes = OAuthProvider::ALL.into_iter().map(|provider| {
            let mut keys = Document::new();
            keys.insert(provider.subject_field(), 1);

            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(format!("{}_unique", provider.subject_field()))
                    .build())
                .build()
        });

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(self.unique_usernames)
                .sparse(true)
                .name(String::from(if self.unique_usernames { "username_unique" } else { "username" }))
                .build())
            .build();

        let secret_index = IndexModel::builder()
            .keys(doc! { "secret": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("secret".to_string())
                .build())
            .build();

        let indexes: Vec<IndexModel> = provider_indexes
            .chain([username_index, secret_index])
            .collect();

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ {} 컬렉션 인덱스 준비 완료", COLLECTION_NAME);
        Ok(())
    }
}

/// E11000 duplicate key 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
