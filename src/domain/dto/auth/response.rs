//! 인증 관련 HTTP 응답 DTO

use serde::Serialize;

use crate::config::FirebaseConfig;
use crate::domain::models::auth::AuthUser;

/// `GET /api/v1/auth/config` 응답
///
/// 프론트엔드가 Firebase JS SDK를 초기화할 때 필요한 값을 그대로 전달합니다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    pub firebase: FirebaseConfig,

    /// 에뮬레이터에 연결된 경우 그 주소
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulator_url: Option<String>,

    pub environment: &'static str,
}

/// `GET /api/v1/auth/state` 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStateResponse {
    pub signed_in: bool,
    pub user: Option<AuthUser>,
}

impl From<Option<AuthUser>> for AuthStateResponse {
    fn from(user: Option<AuthUser>) -> Self {
        Self {
            signed_in: user.is_some(),
            user,
        }
    }
}

/// `GET /health/ready` 응답
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub project_id: String,
    pub authorized_domains: usize,
}
