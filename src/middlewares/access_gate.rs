//! 세션 접근 게이트 미들웨어
//!
//! 요청의 세션 쿠키를 한 번 해석해 [`CurrentUser`]를 Request Extensions에 넣습니다.
//! `required` 모드에서는 익명 요청을 `/login`으로 리다이렉트합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest, Result,
    body::EitherBody,
};
use crate::domain::auth::{AccessMode, CurrentUser};
use crate::middlewares::access_gate_inner::AccessGateService;

/// 세션 접근 게이트
pub struct AccessGate {
    mode: AccessMode,
}

impl AccessGate {
    pub fn new(mode: AccessMode) -> Self {
        Self { mode }
    }

    /// 로그인 필수 게이트
    pub fn required() -> Self {
        Self::new(AccessMode::Required)
    }

    /// 사용자만 붙이고 통과시키는 게이트
    pub fn optional() -> Self {
        Self::new(AccessMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AccessGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

/// 게이트가 이 요청의 사용자를 확인했는지
pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.extensions().contains::<CurrentUser>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header::LOCATION, StatusCode};
    use actix_web::{test, web, App, HttpResponse};

    use crate::test_support::test_state;

    async fn whoami(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(if is_authenticated(&req) { "member" } else { "guest" })
    }

    #[actix_web::test]
    async fn test_required_gate_redirects_anonymous() {
        let (state, _fixtures) = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/private").wrap(AccessGate::required()).route("", web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/private").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_optional_gate_lets_anonymous_through() {
        let (state, _fixtures) = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(AccessGate::optional())
                .route("/open", web::get().to(whoami)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/open").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "guest");
    }

    #[actix_web::test]
    async fn test_required_gate_admits_valid_session() {
        let (state, _fixtures) = test_state();
        let user = state
            .identity
            .find_or_create_by_provider(crate::domain::oauth::OAuthProvider::Google, "g-gate")
            .await
            .unwrap();
        let session = state
            .sessions
            .establish(user, crate::config::AuthProvider::Google, None)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/private").wrap(AccessGate::required()).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get().uri("/private").cookie(session.cookie).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "member");
    }
}
