//! Identity Toolkit REST 응답 DTO

use serde::{Deserialize, Serialize};

/// `GET /v1/projects` 응답 (프로젝트 설정)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub authorized_domains: Vec<String>,
}

/// Identity Toolkit 에러 응답
///
/// ```json
/// { "error": { "code": 400, "message": "API_KEY_INVALID" } }
/// ```
#[derive(Debug, Deserialize)]
pub struct FirebaseErrorResponse {
    pub error: FirebaseErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct FirebaseErrorBody {
    #[serde(default)]
    pub code: u16,

    #[serde(default)]
    pub message: String,
}

impl FirebaseErrorResponse {
    /// 응답 본문에서 에러 메시지를 추출합니다. 형식이 다르면 본문 그대로 사용합니다.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<FirebaseErrorResponse>(body)
            .map(|parsed| parsed.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_config_deserialize() {
        let config: ProjectConfig = serde_json::from_str(
            r#"{"projectId":"demo-project","authorizedDomains":["localhost","demo-project.firebaseapp.com"]}"#,
        )
        .unwrap();

        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.authorized_domains.len(), 2);
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":400,"message":"API_KEY_INVALID","errors":[]}}"#;
        assert_eq!(FirebaseErrorResponse::message_from_body(body), "API_KEY_INVALID");

        assert_eq!(FirebaseErrorResponse::message_from_body("gateway timeout"), "gateway timeout");
    }
}
