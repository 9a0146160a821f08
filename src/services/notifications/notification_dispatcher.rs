//! # 알림 디스패처
//!
//! 비밀글이 저장되면 푸시 알림을 별도 태스크로 발송합니다.
//! 요청 처리는 발송 결과를 기다리지 않고, 실패는 로그로만 남깁니다.

use std::sync::Arc;

use actix_web::rt::task::JoinHandle;
use log::{error, info};

use crate::domain::User;
use crate::domain::notification::PublishRequest;
use crate::services::notifications::PushPublisher;

pub struct NotificationDispatcher {
    /// None이면 알림을 보내지 않습니다.
    publisher: Option<Arc<dyn PushPublisher>>,
    interest: String,
    deep_link: String,
}

impl NotificationDispatcher {
    pub fn new(publisher: Option<Arc<dyn PushPublisher>>, interest: String, deep_link: String) -> Self {
        Self { publisher, interest, deep_link }
    }

    pub fn is_enabled(&self) -> bool {
        self.publisher.is_some()
    }

    /// 작성자 이름이 들어간 알림 본문. 비밀글 내용은 넣지 않습니다.
    pub fn build_payload(&self, author: &str) -> PublishRequest {
        PublishRequest::new_secret(&self.interest, author, &self.deep_link)
    }

    /// 발송 태스크를 띄우고 핸들을 돌려줍니다. 비활성화 상태면 None
    pub fn on_secret_saved(&self, author: &User) -> Option<JoinHandle<()>> {
        let publisher = self.publisher.clone()?;
        let request = self.build_payload(author.display_name());

        Some(actix_web::rt::spawn(async move {
            match publisher.publish(&request).await {
                Ok(publish_id) => info!("📣 새 비밀글 알림 발송: {}", publish_id),
                Err(e) => error!("❌ 푸시 알림 발송 실패: {}", e),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oauth::OAuthProvider;
    use crate::test_support::RecordingPublisher;

    fn dispatcher(publisher: Option<Arc<dyn PushPublisher>>) -> NotificationDispatcher {
        NotificationDispatcher::new(publisher, "secret".to_string(), "http://localhost:5000/secrets".to_string())
    }

    #[actix_web::test]
    async fn test_dispatch_publishes_without_secret_text() {
        let recorder = Arc::new(RecordingPublisher::new());
        let dispatcher = dispatcher(Some(recorder.clone()));
        let mut user = User::new_local("alice".to_string(), "hash".to_string());
        user.secret = Some("my hidden text".to_string());

        dispatcher.on_secret_saved(&user).unwrap().await.unwrap();

        let sent = recorder.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].interests, vec!["secret".to_string()]);
        assert!(sent[0].web.notification.body.starts_with("alice "));
        assert!(!serde_json::to_string(&sent[0]).unwrap().contains("my hidden text"));
    }

    #[actix_web::test]
    async fn test_failed_publish_is_swallowed() {
        let recorder = Arc::new(RecordingPublisher::failing());
        let dispatcher = dispatcher(Some(recorder.clone()));
        let user = User::new_oauth(OAuthProvider::Google, "g-1".to_string());

        let outcome = dispatcher.on_secret_saved(&user).unwrap().await;

        assert!(outcome.is_ok());
        assert_eq!(recorder.requests()[0].fcm.notification.body,
            "Someone has been posted a new secret, check it out now!");
    }

    #[test]
    fn test_disabled_dispatcher_sends_nothing() {
        let dispatcher = dispatcher(None);
        let user = User::new_local("bob".to_string(), "hash".to_string());

        assert!(!dispatcher.is_enabled());
        assert!(dispatcher.on_secret_saved(&user).is_none());
    }
}
