//! # Redis 클라이언트
//!
//! 세션 레코드와 OAuth state를 저장하는 Redis 접근 계층입니다.
//! 값은 JSON 문자열로 저장하고, 모든 키에 만료 시간을 둡니다.
//!
//! 연결은 `ConnectionManager` 하나를 복제해서 씁니다. 연결이 끊기면
//! 매니저가 다음 명령에서 다시 연결합니다.

use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// 연결 후 PING으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::ConfigurationError(format!("REDIS_URL 파싱 실패: {}", e)))?;

        let mut manager = client
            .get_connection_manager()
            .await
            .map_err(redis_error)?;

        redis::cmd("PING")
            .query_async::<()>(&mut manager)
            .await
            .map_err(redis_error)?;

        info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await.map_err(redis_error)?;
        value.map(|json| decode(&json)).transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::RedisError(format!("Serialization failed: {}", e)))?;
        conn.set_ex::<_, _, ()>(key, json, seconds)
            .await
            .map_err(redis_error)
    }

    /// 값을 읽으면서 동시에 삭제합니다 (GETDEL).
    ///
    /// 같은 키를 두 요청이 동시에 꺼내도 한쪽만 값을 받습니다.
    pub async fn take<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.manager.clone();
        let value: Option<String> = redis::cmd("GETDEL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(redis_error)?;
        value.map(|json| decode(&json)).transpose()
    }

    pub async fn del(&self, key: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(key).await.map_err(redis_error)
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> AppResult<T> {
    serde_json::from_str(json)
        .map_err(|e| AppError::RedisError(format!("Deserialization failed: {}", e)))
}

fn redis_error(e: redis::RedisError) -> AppError {
    AppError::RedisError(e.to_string())
}
