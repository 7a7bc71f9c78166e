//! Health HTTP Handlers
//!
//! - `GET /health` - 프로세스 생존 확인
//! - `GET /health/ready` - Firebase(또는 에뮬레이터) 연결 확인

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::domain::dto::auth::response::ReadinessResponse;
use crate::errors::errors::{AppError, AppResult};
use crate::handlers::FirebaseAuthContext;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 인증 서비스 연결 상태를 확인합니다
///
/// 프로젝트 설정 조회가 성공하면 200, 실패하면 503/502를 반환합니다.
#[get("/health/ready")]
pub async fn readiness(context: web::Data<FirebaseAuthContext>) -> AppResult<HttpResponse> {
    let project = context.client().fetch_project_config().await.map_err(|e| {
        log::warn!("인증 서비스 준비 확인 실패: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ReadinessResponse {
        status: "ready",
        project_id: project.project_id,
        authorized_domains: project.authorized_domains.len(),
    }))
}
