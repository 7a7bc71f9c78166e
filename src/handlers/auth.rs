//! Authentication HTTP Handlers
//!
//! 초기화된 인증 컨텍스트를 프론트엔드에 노출하는 읽기 전용 엔드포인트입니다.
//! 로그인 처리 자체는 프론트엔드의 Firebase SDK가 수행합니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/auth/config` - Firebase 웹 설정 및 에뮬레이터 주소
//! - `GET /api/v1/auth/providers` - 사용 가능한 로그인 프로바이더
//! - `GET /api/v1/auth/state` - 현재 로그인 상태

use actix_web::{get, web, HttpResponse};

use crate::domain::dto::auth::response::{AuthStateResponse, ClientConfigResponse};
use crate::errors::errors::AppResult;
use crate::handlers::FirebaseAuthContext;
use crate::services::auth::AuthClientHandle;

/// Firebase 웹 설정을 반환합니다
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/v1/auth/config
/// ```
///
/// ```json
/// {
///   "firebase": { "apiKey": "...", "authDomain": "demo-project.firebaseapp.com", ... },
///   "emulatorUrl": "http://127.0.0.1:9099",
///   "environment": "development"
/// }
/// ```
#[get("/config")]
pub async fn client_config(context: web::Data<FirebaseAuthContext>) -> AppResult<HttpResponse> {
    let response = ClientConfigResponse {
        firebase: context.config().clone(),
        emulator_url: context.emulator().map(|endpoint| endpoint.url()),
        environment: context.environment().as_str(),
    };

    Ok(HttpResponse::Ok().json(response))
}

#[get("/providers")]
pub async fn providers(context: web::Data<FirebaseAuthContext>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(vec![context.provider()]))
}

/// 현재 로그인 상태 스냅샷을 반환합니다
#[get("/state")]
pub async fn auth_state(context: web::Data<FirebaseAuthContext>) -> AppResult<HttpResponse> {
    let user = context.client().current_user();
    Ok(HttpResponse::Ok().json(AuthStateResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REQUIRED_ENV_VARS;
    use crate::domain::models::auth::AuthUser;
    use crate::services::auth::{AuthBootstrap, FirebaseSdk};
    use actix_web::{test, App};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn env(mode: &str) -> HashMap<String, String> {
        let values = [
            "fake-api-key",
            "demo-project.firebaseapp.com",
            "demo-project",
            "demo-project.appspot.com",
            "123456789012",
            "1:123456789012:web:abcdef",
        ];
        let mut env: HashMap<String, String> = REQUIRED_ENV_VARS
            .iter()
            .zip(values)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env.insert("ENVIRONMENT".to_string(), mode.to_string());
        env
    }

    fn context(mode: &str) -> Arc<FirebaseAuthContext> {
        AuthBootstrap::new(FirebaseSdk::new())
            .initialize(&env(mode))
            .unwrap()
    }

    #[actix_web::test]
    async fn test_client_config_in_development() {
        let data = web::Data::from(context("development"));
        let app = test::init_service(
            App::new()
                .app_data(data)
                .service(web::scope("/api/v1/auth").service(client_config)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["firebase"]["projectId"], "demo-project");
        assert_eq!(body["emulatorUrl"], "http://127.0.0.1:9099");
        assert_eq!(body["environment"], "development");
    }

    #[actix_web::test]
    async fn test_client_config_in_production_has_no_emulator() {
        let data = web::Data::from(context("production"));
        let app = test::init_service(
            App::new()
                .app_data(data)
                .service(web::scope("/api/v1/auth").service(client_config)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body.get("emulatorUrl").is_none());
        assert_eq!(body["environment"], "production");
    }

    #[actix_web::test]
    async fn test_providers() {
        let data = web::Data::from(context("production"));
        let app = test::init_service(
            App::new()
                .app_data(data)
                .service(web::scope("/api/v1/auth").service(providers)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/providers").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["providerId"], "google.com");
        assert_eq!(body[0]["signInMethod"], "google.com");
    }

    #[actix_web::test]
    async fn test_auth_state_snapshot() {
        let shared = context("production");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(Arc::clone(&shared)))
                .service(web::scope("/api/v1/auth").service(auth_state)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/state").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["signedIn"], false);
        assert!(body["user"].is_null());

        shared
            .client()
            .update_current_user(Some(AuthUser::new("uid-9", "google.com").with_email("yoon@example.com")));

        let req = test::TestRequest::get().uri("/api/v1/auth/state").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["signedIn"], true);
        assert_eq!(body["user"]["email"], "yoon@example.com");
    }
}
