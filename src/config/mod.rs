//! # Configuration Module
//!
//! 서비스 설정을 담당하는 모듈입니다.
//! 환경 변수는 시작 시점에 [`AppConfig::from_env`]로 한 번만 읽고,
//! 이후에는 만들어진 `AppConfig` 값을 각 컴포넌트 생성자에 직접 넘깁니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 신원 저장소, 세션 설정
//! - [`auth_config`] - OAuth 클라이언트, 푸시 알림 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export ENVIRONMENT="production"   # development, test, staging, production
//!
//! # 저장소
//! export STORE_BACKEND="mongo"      # mongo, memory
//! export MONGO_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="secret_board"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 세션 (프로덕션 필수)
//! export SESSION_SECRET="long-random-value"
//!
//! # OAuth (사용 시)
//! export PUBLIC_BASE_URL="https://secrets.example.com"
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export FACEBOOK_CLIENT_ID="..."
//! export FACEBOOK_CLIENT_SECRET="..."
//!
//! # 푸시 알림 (사용 시)
//! export PUSHER_INSTANCE_ID="..."
//! export PUSHER_SECRET_KEY="..."
//! ```

use std::str::FromStr;

use crate::errors::{AppError, AppResult};

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 설정 키로 값을 찾는 함수. 운영에서는 프로세스 환경 변수, 테스트에서는 HashMap
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub password: PasswordConfig,
    pub oauth: OAuthConfig,
    /// None이면 푸시 알림 비활성화
    pub push: Option<PushConfig>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup) -> AppResult<Self> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            database: DatabaseConfig::from_lookup(lookup)?,
            session: SessionConfig::from_lookup(lookup, &environment)?,
            password: PasswordConfig::from_lookup(lookup, &environment),
            oauth: OAuthConfig::from_lookup(lookup)?,
            push: PushConfig::from_lookup(lookup),
            environment,
        })
    }

    /// 알림 딥링크 등에 쓰이는 공개 URL
    pub fn public_url(&self, path: &str) -> String {
        format!("{}{}", self.oauth.public_base_url, path)
    }
}

/// 값이 없거나 공백뿐이면 None
pub(crate) fn lookup_opt(lookup: EnvLookup, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn lookup_or(lookup: EnvLookup, key: &str, default: &str) -> String {
    lookup_opt(lookup, key).unwrap_or_else(|| default.to_string())
}

/// 값이 있는데 파싱할 수 없으면 ConfigurationError
pub(crate) fn lookup_parse<T: FromStr>(lookup: EnvLookup, key: &str, default: T) -> AppResult<T> {
    match lookup_opt(lookup, key) {
        Some(raw) => raw.parse::<T>().map_err(|_| {
            AppError::ConfigurationError(format!("{} 값을 해석할 수 없습니다: {}", key, raw))
        }),
        None => Ok(default),
    }
}

pub(crate) fn lookup_flag(lookup: EnvLookup, key: &str, default: bool) -> bool {
    match lookup_opt(lookup, key) {
        Some(raw) => matches!(raw.to_lowercase().as_str(), "true" | "1" | "yes" | "on"),
        None => default,
    }
}
