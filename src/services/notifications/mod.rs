//! 푸시 알림 서비스 모듈

pub mod push_publisher;
pub mod notification_dispatcher;

pub use push_publisher::{BeamsPublisher, PushPublisher};
pub use notification_dispatcher::NotificationDispatcher;
