//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 신원 저장소, 세션 저장소 설정을 관리합니다.
//! 모든 값은 시작 시점에 한 번 읽혀 [`crate::config::AppConfig`]로 묶입니다.

use std::fmt;

use log::warn;

use crate::config::{lookup_flag, lookup_opt, lookup_or, lookup_parse, EnvLookup};
use crate::errors::{AppError, AppResult};

/// 개발 환경에서만 사용하는 세션 서명 키
const DEV_SESSION_SECRET: &str = "secret-board-development-session-secret";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값으로 실행 환경을 결정합니다.
    ///
    /// 둘 다 없으면 `Production`을 기본값으로 사용합니다.
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        lookup_opt(lookup, "ENVIRONMENT")
            .or_else(|| lookup_opt(lookup, "NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 유효 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: EnvLookup, env: &Environment) -> Self {
        let default_cost = Self::bcrypt_cost_for_env(env);

        let bcrypt_cost = match lookup_opt(lookup, "BCRYPT_COST") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => cost,
                _ => {
                    warn!("⚠️ BCRYPT_COST 값이 올바르지 않습니다 ({}). 기본값 {} 사용", raw, default_cost);
                    default_cost
                }
            },
            None => default_cost,
        };

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩 포트. 기본값: 5000
    pub port: u16,
}

impl ServerConfig {
    pub fn from_lookup(lookup: EnvLookup) -> AppResult<Self> {
        Ok(Self {
            host: lookup_or(lookup, "HOST", "0.0.0.0"),
            port: lookup_parse(lookup, "PORT", 5000)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 신원 저장소와 세션 저장소의 구현 선택
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// MongoDB + Redis
    Mongo,
    /// 프로세스 메모리 (테스트, 로컬 데모용)
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("지원하지 않는 저장소 백엔드: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Mongo => "mongo",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 신원 저장소(MongoDB) 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub mongo_url: String,
    pub database_name: String,
    /// username에 unique 인덱스를 걸지 여부
    pub username_unique_index: bool,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: EnvLookup) -> AppResult<Self> {
        let backend = StoreBackend::from_str(&lookup_or(lookup, "STORE_BACKEND", "mongo"))
            .map_err(AppError::ConfigurationError)?;

        Ok(Self {
            backend,
            mongo_url: lookup_or(lookup, "MONGO_URL", "mongodb://localhost:27017"),
            database_name: lookup_or(lookup, "DATABASE_NAME", "secret_board"),
            username_unique_index: lookup_flag(lookup, "USERNAME_UNIQUE_INDEX", false),
        })
    }
}

/// 세션 쿠키와 Redis 세션 저장소 설정
#[derive(Clone)]
pub struct SessionConfig {
    pub redis_url: String,
    /// 쿠키 서명 키를 유도할 서버 비밀값
    pub secret: String,
    pub cookie_name: String,
    /// 서버 측 세션 레코드 수명(초)
    pub ttl_seconds: u64,
    /// 쿠키에 Secure 플래그를 붙일지 여부
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// 프로덕션에서는 `SESSION_SECRET`이 반드시 필요합니다.
    pub fn from_lookup(lookup: EnvLookup, env: &Environment) -> AppResult<Self> {
        let secret = match lookup_opt(lookup, "SESSION_SECRET") {
            Some(secret) => secret,
            None if env.is_production() => {
                return Err(AppError::ConfigurationError(
                    "SESSION_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                warn!("⚠️ SESSION_SECRET이 설정되지 않아 개발용 비밀값을 사용합니다");
                DEV_SESSION_SECRET.to_string()
            }
        };

        Ok(Self {
            redis_url: lookup_or(lookup, "REDIS_URL", "redis://localhost:6379"),
            secret,
            cookie_name: lookup_or(lookup, "SESSION_COOKIE_NAME", "secret_board.sid"),
            ttl_seconds: lookup_parse(lookup, "SESSION_TTL_SECONDS", 1_209_600)?,
            secure_cookie: env.is_production(),
        })
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("redis_url", &self.redis_url)
            .field("secret", &"***")
            .field("cookie_name", &self.cookie_name)
            .field("ttl_seconds", &self.ttl_seconds)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}
