//! # 사용자 리포지토리 인터페이스
//!
//! 신원 저장소가 제공해야 하는 연산을 정의합니다.
//! 운영에서는 [`super::MongoUserRepository`], 테스트와 로컬 데모에서는
//! [`super::MemoryUserRepository`]를 사용합니다.
//!
//! ## 불변 조건
//!
//! - 같은 프로바이더의 같은 subject id를 가진 레코드는 최대 하나
//! - `find_or_create_by_provider`는 동시에 호출되어도 레코드를 하나만 만든다
//! - 사용자 레코드는 삭제되지 않는다

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::User;
use crate::domain::oauth::OAuthProvider;
use crate::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 ID가 채워진 사용자를 돌려줍니다.
    ///
    /// 저장소 수준의 username unique 인덱스에 걸리면 ConflictError
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// username이 같은 모든 로컬 레코드 (생성 순)
    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>>;

    /// 프로바이더 subject id로 찾고, 없으면 원자적으로 만듭니다.
    async fn find_or_create_by_provider(&self, provider: OAuthProvider, subject_id: &str) -> AppResult<User>;

    /// secret 필드가 있는 사용자 스냅샷
    async fn find_all_with_secret(&self) -> AppResult<Vec<User>>;

    /// 사용자의 secret을 덮어씁니다. 사용자가 없으면 `Ok(false)`
    async fn set_secret(&self, id: &ObjectId, secret: &str) -> AppResult<bool>;

    /// 시작 시 인덱스 생성. 인덱스가 없는 구현은 아무것도 하지 않습니다.
    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
