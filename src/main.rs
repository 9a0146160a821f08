//! 시크릿 보드 메인 애플리케이션
//!
//! 설정을 읽고 저장소와 외부 연동 컴포넌트를 조립한 뒤 Actix-web 서버를 띄웁니다.
//! `STORE_BACKEND=memory`이면 MongoDB와 Redis 없이도 실행됩니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use secret_board::caching::redis::RedisClient;
use secret_board::config::{AppConfig, StoreBackend};
use secret_board::core::AppState;
use secret_board::db::Database;
use secret_board::domain::oauth::OAuthProvider;
use secret_board::errors::AppResult;
use secret_board::middlewares::AccessGate;
use secret_board::repositories::sessions::{MemorySessionStore, RedisSessionStore, SessionStore};
use secret_board::repositories::users::{MemoryUserRepository, MongoUserRepository, UserRepository};
use secret_board::routes::configure_all_routes;
use secret_board::services::auth::{HttpOAuthGateway, OAuthGateway};
use secret_board::services::notifications::{BeamsPublisher, PushPublisher};
use secret_board::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 시크릿 보드 시작중...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 설정 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    print_boxed_title("🔐 SECRET BOARD");

    let (user_repo, session_store) = match initialize_stores(&config).await {
        Ok(stores) => stores,
        Err(e) => {
            error!("❌ 저장소 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };
    let (gateway, publisher) = initialize_integrations(&config);

    let state = AppState::new(config, user_repo, session_store, gateway, publisher);

    info!("✅ 모든 컴포넌트가 준비되었습니다!");

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 전역 미들웨어 순서 (바깥쪽부터):
///
/// 1. `NormalizePath::trim()` - 끝 슬래시 제거
/// 2. `Logger` - 접근 로그
/// 3. `AccessGate::optional()` - 세션 쿠키가 있으면 현재 사용자 첨부
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = state.config.server.bind_address();
    let providers: Vec<&str> = std::iter::once("local")
        .chain(state.oauth.enabled_providers().iter().map(|provider| provider.as_str()))
        .collect();

    print_final_summary(&bind_address, &providers, state.notifications.is_enabled());
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(AccessGate::optional())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 없음, 프로세스 환경 변수만 사용: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// `RUST_LOG`가 없으면 "info,actix_web=info"
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 신원 저장소와 세션 저장소를 연결합니다
///
/// `mongo` 백엔드는 MongoDB 연결과 인덱스 생성, Redis 연결까지 성공해야 시작합니다.
async fn initialize_stores(
    config: &AppConfig,
) -> AppResult<(Arc<dyn UserRepository>, Arc<dyn SessionStore>)> {
    print_step_start(1, "Connecting identity and session stores");

    match config.database.backend {
        StoreBackend::Mongo => {
            let database = Arc::new(Database::connect(&config.database).await?);
            print_sub_task("MongoDB", database.database_name());

            let users = MongoUserRepository::new(database, config.database.username_unique_index);
            users.create_indexes().await?;
            print_sub_task(
                "Username index",
                if config.database.username_unique_index { "unique" } else { "non-unique" },
            );

            let redis = Arc::new(RedisClient::connect(&config.session.redis_url).await?);
            print_sub_task("Redis", "sessions");

            print_step_complete(1, "Stores ready", 2);
            Ok((Arc::new(users), Arc::new(RedisSessionStore::new(redis))))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중. 재시작하면 사용자와 세션이 사라집니다");
            print_sub_task("Users", "in-memory");
            print_sub_task("Sessions", "in-memory");

            print_step_complete(1, "Stores ready", 2);
            Ok((
                Arc::new(MemoryUserRepository::new(config.database.username_unique_index)),
                Arc::new(MemorySessionStore::new()),
            ))
        }
    }
}

/// OAuth 게이트웨이와 푸시 퍼블리셔를 만듭니다
fn initialize_integrations(
    config: &AppConfig,
) -> (Arc<dyn OAuthGateway>, Option<Arc<dyn PushPublisher>>) {
    print_step_start(2, "Configuring login providers and push notifications");

    for provider in OAuthProvider::ALL {
        let status = if config.oauth.is_enabled(provider) { "enabled" } else { "not configured" };
        print_sub_task(provider.label(), status);
    }

    let gateway: Arc<dyn OAuthGateway> = Arc::new(HttpOAuthGateway::new(config.oauth.clone()));

    let publisher: Option<Arc<dyn PushPublisher>> = match &config.push {
        Some(push) => {
            print_sub_task("Pusher Beams", &push.interest);
            Some(Arc::new(BeamsPublisher::new(push.clone())))
        }
        None => {
            print_sub_task("Pusher Beams", "disabled");
            None
        }
    };

    print_step_complete(2, "Integrations ready", OAuthProvider::ALL.len() + 1);
    (gateway, publisher)
}
