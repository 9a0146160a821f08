//! 라우트 설정 모듈
//!
//! 페이지, 로그인 흐름, 비밀글 작성 라우트를 등록합니다.
//!
//! | 경로 | 접근 |
//! |------|------|
//! | `/`, `/login`, `/register`, `/secrets`, `/health` | 공개 |
//! | `POST /register`, `POST /login`, `/logout` | 공개 |
//! | `/auth/{provider}`, `/auth/{provider}/secrets` | 공개 |
//! | `/submit` (GET, POST) | 로그인 필수 (`AccessGate::required()`) |
//!
//! 앱 전체는 `AccessGate::optional()`로 감싸서 모든 페이지가 로그인 상태를 알 수 있게 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .wrap(AccessGate::optional())
//!     .configure(configure_all_routes)
//! ```

use actix_web::web;

use crate::handlers;
use crate::middlewares::AccessGate;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page)
        .service(handlers::pages::secrets_page)
        .service(handlers::pages::health);
}

/// 로컬 가입/로그인/로그아웃과 OAuth 라우트
///
/// `/auth/google`, `/auth/facebook`은 같은 핸들러가 경로 세그먼트로 프로바이더를 구분합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(
            web::scope("/auth")
                .service(handlers::auth::oauth_begin)
                .service(handlers::auth::oauth_callback),
        );
}

fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/submit")
            .wrap(AccessGate::required())
            .service(handlers::secrets::submit_page)
            .service(handlers::secrets::submit_secret),
    );
}
