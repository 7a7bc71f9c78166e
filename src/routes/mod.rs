//! 라우트 설정 모듈
//!
//! 기능별 핸들러를 애플리케이션에 등록합니다.
//!
//! ```text
//! /health                  → 생존 확인
//! /health/ready            → Firebase 연결 확인
//! /api/v1/auth/config      → Firebase 웹 설정
//! /api/v1/auth/providers   → 로그인 프로바이더
//! /api/v1/auth/state       → 현재 로그인 상태
//! ```

use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::from(context))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check);
    cfg.service(handlers::health::readiness);

    configure_auth_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::client_config)
            .service(handlers::auth::providers)
            .service(handlers::auth::auth_state),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REQUIRED_ENV_VARS;
    use crate::services::auth::{AuthBootstrap, FirebaseSdk};
    use actix_web::{http::StatusCode, test, App};
    use std::collections::HashMap;

    #[actix_web::test]
    async fn test_all_routes_are_registered() {
        let env: HashMap<String, String> = REQUIRED_ENV_VARS
            .iter()
            .zip([
                "fake-api-key",
                "demo-project.firebaseapp.com",
                "demo-project",
                "demo-project.appspot.com",
                "123456789012",
                "1:123456789012:web:abcdef",
            ])
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let context = AuthBootstrap::new(FirebaseSdk::new())
            .initialize(&env)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(context))
                .configure(configure_all_routes),
        )
        .await;

        for uri in ["/health", "/api/v1/auth/config", "/api/v1/auth/providers", "/api/v1/auth/state"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let response = test::call_service(&app, req).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
