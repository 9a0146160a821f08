//! Database Connection Management Module
//!
//! 신원 저장소로 쓰는 MongoDB 연결을 관리합니다.
//! 연결 문자열과 데이터베이스 이름은 [`DatabaseConfig`]에서 받습니다.
//!
//! ```rust,ignore
//! let database = Database::connect(&config.database).await?;
//! let users = MongoUserRepository::new(Arc::new(database), config.database.username_unique_index);
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_url)
            .await
            .map_err(|e| AppError::ConfigurationError(format!("MONGO_URL 파싱 실패: {}", e)))?;

        client_options.app_name = Some("secret_board".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
