//! Firebase 인증 초기화 서비스 메인 애플리케이션
//!
//! 환경 설정을 로드하고 Firebase 인증 컨텍스트를 초기화한 뒤,
//! 읽기 전용 REST API를 제공하는 Actix-web 서버를 구동합니다.

use std::process::ExitCode;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use firebase_auth_bootstrap::config::{
    env_file_for_profile, ProcessEnv, ServerConfig, DEFAULT_ENV_FILE,
};
use firebase_auth_bootstrap::handlers::FirebaseAuthContext;
use firebase_auth_bootstrap::routes::configure_all_routes;
use firebase_auth_bootstrap::services::auth::{AuthBootstrap, FirebaseSdk};
use firebase_auth_bootstrap::utils::display_terminal::print_auth_summary;

#[actix_web::main]
async fn main() -> ExitCode {
    // 환경 설정 및 로깅 초기화 (.env의 RUST_LOG가 반영되도록 파일을 먼저 로드)
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(Some(filename)) => info!("{} 파일 로드 됨", filename),
        Ok(None) => {}
        Err(e) => error!("환경 설정 파일 로드 실패: {}", e),
    }

    info!("🚀 Firebase 인증 서비스 시작중...");

    // 설정 누락이나 클라이언트 생성 실패는 복구할 수 없으므로 바로 종료
    let bootstrap = AuthBootstrap::new(FirebaseSdk::new());
    let context = match bootstrap.initialize(&ProcessEnv) {
        Ok(context) => context,
        Err(e) => {
            error!("❌ 인증 초기화 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let emulator_url = context.emulator().map(|endpoint| endpoint.url());
    print_auth_summary(
        &context.config().project_id,
        context.environment().as_str(),
        context.provider().provider_id(),
        emulator_url.as_deref(),
    );

    match start_http_server(context).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ HTTP 서버 오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: Arc<FirebaseAuthContext>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address(&ProcessEnv);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth config: http://{}/api/v1/auth/config", bind_address);

    let data = web::Data::from(context);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(2)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 로거보다 먼저 실행되므로 결과는 호출자가 로거 초기화 후에 출력합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드 (없어도 됨)
///
/// # Examples
///
/// ```bash
/// # 개발 환경 (.env.dev 에 ENVIRONMENT=development 설정 시 에뮬레이터 사용)
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> Result<Option<&'static str>, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_default();
    let filename = env_file_for_profile(&profile);

    match dotenv::from_filename(filename) {
        Ok(_) => Ok(Some(filename)),
        // 파일이 없어도 프로세스 환경 변수만으로 실행 가능
        Err(_) if filename == DEFAULT_ENV_FILE => Ok(None),
        Err(e) => Err(e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// RUST_LOG=firebase_auth_bootstrap::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버(Vite, React)에서의 조회를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
