//! 요청에 부착되는 현재 사용자
//!
//! 접근 게이트가 세션을 해석해 Request Extensions에 넣어 두면
//! 로그인 필수 핸들러는 `CurrentUser` 추출자로 꺼내 씁니다.
//! 공개 페이지는 `middlewares::is_authenticated`로 로그인 여부만 확인합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::domain::User;

/// 세션으로 확인된 사용자
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 요청 시점에 신원 저장소에서 다시 읽은 사용자
    pub user: User,
    /// 현재 세션 ID
    pub session_id: String,
}

impl CurrentUser {
    pub fn user_id(&self) -> Option<ObjectId> {
        self.user.id
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Login required",
            ))),
        }
    }
}
