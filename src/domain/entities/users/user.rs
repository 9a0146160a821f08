//! User Entity Implementation
//!
//! 게시판의 사용자 레코드입니다. 로컬 계정(사용자명 + bcrypt 해시)과
//! Google/Facebook 계정이 같은 컬렉션에 섞여 저장되며, 각 레코드는
//! 한 가지 방식의 자격 증명만 가집니다. 계정 간 연결은 하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::oauth::OAuthProvider;

/// 작성자 이름이 없는 사용자를 알림에 표시할 때 쓰는 이름
pub const ANONYMOUS_AUTHOR: &str = "Someone";

/// 사용자 엔티티
///
/// MongoDB 문서 필드명은 `username`, `password`, `googleId`, `facebookId`,
/// `secret`, `created_at`, `updated_at`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 계정 사용자명 (OAuth 사용자는 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시. salt와 cost가 해시 문자열 안에 들어 있습니다.
    #[serde(rename = "password", default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(rename = "googleId", default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(rename = "facebookId", default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 사용자가 마지막으로 제출한 비밀글
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더의 subject id만 기록하고 사용자명과 비밀번호는 비워 둡니다.
    pub fn new_oauth(provider: OAuthProvider, subject_id: String) -> Self {
        let now = DateTime::now();
        let (google_id, facebook_id) = match provider {
            OAuthProvider::Google => (Some(subject_id), None),
            OAuthProvider::Facebook => (None, Some(subject_id)),
        };

        Self {
            id: None,
            username: None,
            password_hash: None,
            google_id,
            facebook_id,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.username.is_some() && self.password_hash.is_some()
    }

    /// 해당 프로바이더에서의 subject id
    pub fn provider_subject(&self, provider: OAuthProvider) -> Option<&str> {
        match provider {
            OAuthProvider::Google => self.google_id.as_deref(),
            OAuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }

    /// 알림에 표시할 작성자 이름
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(ANONYMOUS_AUTHOR)
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}
