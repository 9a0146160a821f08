//! AccessGate 세션 확인 로직
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::LOCATION;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppState;
use crate::domain::auth::{AccessMode, CurrentUser};

/// 로그인하지 않은 요청을 보낼 경로
pub const LOGIN_PATH: &str = "/login";

/// 실제 세션 확인을 수행하는 서비스
pub struct AccessGateService<S> {
    pub service: Rc<S>,
    pub mode: AccessMode,
}

impl<S, B> Service<ServiceRequest> for AccessGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let authenticated = attach_current_user(&req).await;

            if mode == AccessMode::Required && !authenticated {
                log::debug!("익명 요청 차단: {} → {}", req.path(), LOGIN_PATH);
                let response = HttpResponse::Found()
                    .insert_header((LOCATION, LOGIN_PATH))
                    .finish();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에 CurrentUser를 붙이고 인증 여부를 돌려줍니다.
///
/// 바깥 게이트가 이미 해석했다면 세션 저장소를 다시 조회하지 않습니다.
async fn attach_current_user(req: &ServiceRequest) -> bool {
    if req.extensions().contains::<CurrentUser>() {
        return true;
    }

    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
        log::error!("❌ AppState가 등록되지 않아 세션을 확인할 수 없습니다");
        return false;
    };

    match state.sessions.resolve(req.request()).await {
        Some(current) => {
            log::debug!("세션 확인: 사용자 {}", current.user.id_string().unwrap_or_default());
            req.extensions_mut().insert(current);
            true
        }
        None => false,
    }
}
