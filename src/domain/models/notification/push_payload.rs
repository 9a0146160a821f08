//! Pusher Beams publish 요청/응답 본문
//!
//! 웹, APNs, FCM 채널에 같은 알림을 보냅니다. 비밀글 본문은 싣지 않습니다.

use serde::{Deserialize, Serialize};

pub const NOTIFICATION_TITLE: &str = "New Secret published";
pub const APNS_ALERT: &str = "New Secret published!";

/// `POST .../publishes/interests` 요청 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishRequest {
    pub interests: Vec<String>,
    pub web: WebPayload,
    pub apns: ApnsPayload,
    pub fcm: FcmPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPayload {
    pub notification: WebNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebNotification {
    pub title: String,
    pub body: String,
    pub deep_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aps {
    pub alert: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmPayload {
    pub notification: FcmNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

impl PublishRequest {
    /// 새 비밀글 알림
    pub fn new_secret(interest: &str, author: &str, deep_link: &str) -> Self {
        let body = format!("{} has been posted a new secret, check it out now!", author);

        Self {
            interests: vec![interest.to_string()],
            web: WebPayload {
                notification: WebNotification {
                    title: NOTIFICATION_TITLE.to_string(),
                    body: body.clone(),
                    deep_link: deep_link.to_string(),
                },
            },
            apns: ApnsPayload {
                aps: Aps {
                    alert: APNS_ALERT.to_string(),
                },
            },
            fcm: FcmPayload {
                notification: FcmNotification {
                    title: NOTIFICATION_TITLE.to_string(),
                    body,
                },
            },
        }
    }
}

/// publish 응답
#[derive(Debug, Clone, Deserialize)]
pub struct PublishResponse {
    #[serde(rename = "publishId")]
    pub publish_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_secret_payload_shape() {
        let request = PublishRequest::new_secret("secret", "alice", "http://localhost:5000/secrets");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "interests": ["secret"],
                "web": { "notification": {
                    "title": "New Secret published",
                    "body": "alice has been posted a new secret, check it out now!",
                    "deep_link": "http://localhost:5000/secrets"
                }},
                "apns": { "aps": { "alert": "New Secret published!" } },
                "fcm": { "notification": {
                    "title": "New Secret published",
                    "body": "alice has been posted a new secret, check it out now!"
                }}
            })
        );
    }

    #[test]
    fn test_publish_response() {
        let response: PublishResponse =
            serde_json::from_str(r#"{"publishId":"pubid-33f3f68e"}"#).unwrap();
        assert_eq!(response.publish_id, "pubid-33f3f68e");
    }
}
