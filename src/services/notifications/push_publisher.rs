//! 푸시 알림 발송 채널

use async_trait::async_trait;

use crate::config::PushConfig;
use crate::domain::notification::{PublishRequest, PublishResponse};
use crate::errors::{AppError, AppResult};

/// interest 구독자에게 알림을 보내고 publish ID를 돌려줍니다.
#[async_trait]
pub trait PushPublisher: Send + Sync {
    async fn publish(&self, request: &PublishRequest) -> AppResult<String>;
}

/// Pusher Beams publish API 클라이언트
pub struct BeamsPublisher {
    http: reqwest::Client,
    config: PushConfig,
}

impl BeamsPublisher {
    pub fn new(config: PushConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PushPublisher for BeamsPublisher {
    async fn publish(&self, request: &PublishRequest) -> AppResult<String> {
        let response = self
            .http
            .post(self.config.publish_url())
            .bearer_auth(&self.config.secret_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Beams 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Beams publish 실패 ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .json::<PublishResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Beams 응답 파싱 실패: {}", e)))?;

        Ok(body.publish_id)
    }
}
