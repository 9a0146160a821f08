//! 세션 저장소에 기록되는 주체 정보

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;

/// 세션 레코드 본문
///
/// 사용자를 통째로 담지 않고 ID만 보관합니다. 요청마다 이 ID로
/// 신원 저장소에서 사용자를 다시 조회합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPrincipal {
    /// 사용자 ObjectId (hex)
    pub user_id: String,
    /// 세션을 만든 로그인 방식
    pub auth_provider: AuthProvider,
    pub authenticated_at: DateTime<Utc>,
}

impl SessionPrincipal {
    pub fn new(user_id: String, auth_provider: AuthProvider) -> Self {
        Self {
            user_id,
            auth_provider,
            authenticated_at: Utc::now(),
        }
    }
}
