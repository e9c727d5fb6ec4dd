//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 연결을 만들고 회원가입 컨트롤러를 조립한 뒤 `POST /api/signup`을 제공합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use signup_service_backend::config::{CorsConfig, RateLimitConfig, ServerConfig};
use signup_service_backend::core::factories::make_signup_controller;
use signup_service_backend::db::Database;
use signup_service_backend::routes::configure_all_routes;

/// `.env` 파일 로드 결과
///
/// 로거가 초기화되기 전에 로드하므로 결과를 보관했다가 나중에 기록합니다.
struct EnvFile {
    profile: String,
    filename: &'static str,
    loaded: Result<PathBuf, dotenv::Error>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // RUST_LOG도 .env에서 읽을 수 있도록 로거보다 먼저 로드
    let env_file = load_env_file();
    init_logging();
    log_env_file(&env_file);

    info!("🚀 회원가입 서비스 시작중...");

    let database = initialize_database().await?;

    let result = start_http_server(database.clone()).await;

    database.disconnect().await;
    info!("👋 서버 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 기본적으로 127.0.0.1:5050에서 실행됩니다
/// // Health check: http://127.0.0.1:5050/health
/// // 회원가입: POST http://127.0.0.1:5050/api/signup
/// ```
async fn start_http_server(database: Arc<Database>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: POST http://{}/api/signup", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let allowed_origins = CorsConfig::allowed_origins();
    if allowed_origins.is_empty() {
        info!("CORS 허용 Origin 없음: 교차 출처 요청은 거부됩니다");
    } else {
        info!("CORS 허용 Origin: {:?}", allowed_origins);
    }

    // 워커 간 공유되는 컨트롤러
    let signup_controller = web::Data::new(make_signup_controller(database));

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(signup_controller.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// `PROFILE`에 맞는 `.env` 파일을 로드합니다
///
/// 로깅 초기화 전에 호출되므로 여기서는 로그를 남기지 않습니다.
///
/// | `PROFILE` | 파일 |
/// |-----------|------|
/// | `dev` (기본값) | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 기타 | `.env` |
fn load_env_file() -> EnvFile {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    EnvFile {
        loaded: dotenv::from_filename(filename),
        profile,
        filename,
    }
}

fn log_env_file(env_file: &EnvFile) {
    info!("Current profile: {}", env_file.profile);

    match &env_file.loaded {
        Ok(path) => info!("{} 파일 로드 됨: {}", env_file.filename, path.display()),
        Err(e) => warn!("{} 파일 로드 실패, 프로세스 환경 변수만 사용: {}", env_file.filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=signup_service_backend::handlers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결 실패는 `std::io::Error`로 변환되어 애플리케이션 시작을 중단합니다.
async fn initialize_database() -> io::Result<Arc<Database>> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    Ok(Arc::new(database))
}

/// `CORS_ALLOWED_ORIGINS`의 Origin에 대해 회원가입 요청을 허용합니다
///
/// 목록이 비어 있으면 교차 출처 요청은 모두 거부됩니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
