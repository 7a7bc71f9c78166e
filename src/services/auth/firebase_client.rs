//! # Firebase Auth Client
//!
//! Identity Toolkit REST API를 대상으로 하는 [`AuthSdk`] / [`AuthClientHandle`] 구현체입니다.
//!
//! ## 엔드포인트
//!
//! | 모드 | Base URL |
//! |------|----------|
//! | 실제 서비스 | `https://identitytoolkit.googleapis.com` |
//! | 에뮬레이터 | `http://127.0.0.1:9099/identitytoolkit.googleapis.com` |
//!
//! 에뮬레이터는 실제 호스트 이름을 경로 접두사로 받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthSdk, FirebaseSdk};
//!
//! let client = FirebaseSdk::new().initialize_app(&config)?;
//! client.connect_emulator(&EmulatorEndpoint::local());
//!
//! let project = client.fetch_project_config().await?;
//! println!("승인된 도메인: {:?}", project.authorized_domains);
//! ```

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use log::{debug, warn};

use crate::config::{EmulatorEndpoint, FirebaseConfig};
use crate::domain::dto::auth::firebase_response::{FirebaseErrorResponse, ProjectConfig};
use crate::domain::models::auth::AuthUser;
use crate::errors::errors::SdkError;
use crate::services::auth::auth_state::{AuthStateObserver, AuthStatePublisher, AuthStateSubscription};
use crate::services::auth::sdk::{AuthClientHandle, AuthSdk};
use crate::utils::string_utils::{contains_whitespace, is_bare_host};

const IDENTITY_TOOLKIT_HOST: &str = "identitytoolkit.googleapis.com";

/// Firebase SDK 팩토리
#[derive(Debug, Clone)]
pub struct FirebaseSdk {
    request_timeout: Duration,
}

impl FirebaseSdk {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self {
            request_timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }

    /// 설정값 형식을 검증합니다.
    ///
    /// - API 키: 공백 없음
    /// - auth domain, storage bucket: 스킴/경로 없는 호스트 이름
    /// - 프로젝트 ID: 6~30자의 소문자, 숫자, `-` (소문자로 시작)
    pub fn validate_config(config: &FirebaseConfig) -> Result<(), SdkError> {
        if contains_whitespace(&config.api_key) {
            return Err(SdkError::InvalidConfiguration(
                "apiKey에 공백 문자가 포함되어 있습니다".to_string(),
            ));
        }

        if !is_bare_host(&config.auth_domain) {
            return Err(SdkError::InvalidConfiguration(format!(
                "authDomain은 호스트 이름이어야 합니다: {}",
                config.auth_domain
            )));
        }

        if !is_bare_host(&config.storage_bucket) {
            return Err(SdkError::InvalidConfiguration(format!(
                "storageBucket은 버킷 이름이어야 합니다: {}",
                config.storage_bucket
            )));
        }

        if !is_valid_project_id(&config.project_id) {
            return Err(SdkError::InvalidConfiguration(format!(
                "projectId 형식이 올바르지 않습니다: {}",
                config.project_id
            )));
        }

        Ok(())
    }
}

impl Default for FirebaseSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSdk for FirebaseSdk {
    type Client = FirebaseAuthClient;

    fn initialize_app(&self, config: &FirebaseConfig) -> Result<FirebaseAuthClient, SdkError> {
        Self::validate_config(config)?;

        let http = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| SdkError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(FirebaseAuthClient {
            config: config.clone(),
            http,
            emulator: RwLock::new(None),
            auth_state: AuthStatePublisher::default(),
        })
    }
}

fn is_valid_project_id(project_id: &str) -> bool {
    (6..=30).contains(&project_id.len())
        && project_id.starts_with(|c: char| c.is_ascii_lowercase())
        && project_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Identity Toolkit 기반 클라이언트 핸들
#[derive(Debug)]
pub struct FirebaseAuthClient {
    config: FirebaseConfig,
    http: reqwest::Client,
    emulator: RwLock<Option<EmulatorEndpoint>>,
    auth_state: AuthStatePublisher,
}

impl FirebaseAuthClient {
    pub fn emulator(&self) -> Option<EmulatorEndpoint> {
        self.emulator
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn api_base_url(&self) -> String {
        match self.emulator() {
            Some(endpoint) => format!("{}/{}", endpoint.url(), IDENTITY_TOOLKIT_HOST),
            None => format!("https://{}", IDENTITY_TOOLKIT_HOST),
        }
    }

    /// SDK 세션이 바뀌었을 때 현재 사용자를 갱신합니다.
    ///
    /// 로그인 상태가 실제로 바뀐 경우에만 관찰자에게 이벤트가 전달됩니다.
    pub fn update_current_user(&self, user: Option<AuthUser>) -> bool {
        self.auth_state.publish(user)
    }

    pub fn sign_out(&self) -> bool {
        self.update_current_user(None)
    }

    /// 프로젝트 설정을 조회합니다 (`GET /v1/projects`).
    ///
    /// 시작 이후 서비스 연결 상태를 확인하는 용도로 사용합니다.
    ///
    /// # Errors
    ///
    /// * `SdkError::Network` - 연결 실패, 타임아웃
    /// * `SdkError::Service` - 2xx 이외의 응답
    /// * `SdkError::Decode` - 응답 본문 파싱 실패
    pub async fn fetch_project_config(&self) -> Result<ProjectConfig, SdkError> {
        let url = self.project_config_url();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SdkError::Network(format!("프로젝트 설정 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Service {
                status: status.as_u16(),
                message: FirebaseErrorResponse::message_from_body(&body),
            });
        }

        response
            .json::<ProjectConfig>()
            .await
            .map_err(|e| SdkError::Decode(format!("프로젝트 설정 파싱 실패: {}", e)))
    }

    fn project_config_url(&self) -> String {
        format!(
            "{}/v1/projects?key={}",
            self.api_base_url(),
            urlencoding::encode(&self.config.api_key)
        )
    }
}

impl AuthClientHandle for FirebaseAuthClient {
    fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    /// 처음 연결한 에뮬레이터만 유효합니다.
    ///
    /// 같은 주소로 다시 호출하면 아무 일도 일어나지 않고,
    /// 다른 주소로 호출하면 경고 로그를 남기고 무시합니다.
    fn connect_emulator(&self, endpoint: &EmulatorEndpoint) {
        let mut emulator = self.emulator.write().unwrap_or_else(PoisonError::into_inner);

        match emulator.as_ref() {
            None => {
                *emulator = Some(endpoint.clone());
                debug!("Auth Emulator 엔드포인트 설정: {}", endpoint);
            }
            Some(existing) if existing == endpoint => {}
            Some(existing) => {
                warn!(
                    "⚠️ 이미 {} 에뮬레이터에 연결되어 있어 {} 요청을 무시합니다",
                    existing, endpoint
                );
            }
        }
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.auth_state.current_user()
    }

    fn on_auth_state_changed(
        &self,
        observer: Arc<dyn AuthStateObserver>,
    ) -> Result<AuthStateSubscription, SdkError> {
        self.auth_state.subscribe(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::auth_state::test_support::{
        install_capturing_logger, logged, RecordingObserver,
    };

    fn demo_config() -> FirebaseConfig {
        FirebaseConfig {
            api_key: "fake-api-key".to_string(),
            auth_domain: "demo-project.firebaseapp.com".to_string(),
            project_id: "demo-project".to_string(),
            storage_bucket: "demo-project.appspot.com".to_string(),
            messaging_sender_id: "123456789012".to_string(),
            app_id: "1:123456789012:web:abcdef".to_string(),
        }
    }

    #[test]
    fn test_initialize_with_valid_config() {
        let client = FirebaseSdk::new().initialize_app(&demo_config()).unwrap();

        assert_eq!(client.config().project_id, "demo-project");
        assert!(client.emulator().is_none());
        assert!(client.current_user().is_none());
    }

    #[test]
    fn test_invalid_configurations_are_rejected() {
        let cases: Vec<(&str, fn(&mut FirebaseConfig))> = vec![
            ("api key", |c| c.api_key = "AIza bad".to_string()),
            ("auth domain scheme", |c| {
                c.auth_domain = "https://demo-project.firebaseapp.com".to_string()
            }),
            ("bucket path", |c| c.storage_bucket = "demo-project.appspot.com/x".to_string()),
            ("project id too short", |c| c.project_id = "demo".to_string()),
            ("project id uppercase", |c| c.project_id = "Demo-Project".to_string()),
            ("project id leading digit", |c| c.project_id = "1demo-project".to_string()),
        ];

        for (name, mutate) in cases {
            let mut config = demo_config();
            mutate(&mut config);

            let result = FirebaseSdk::new().initialize_app(&config);
            assert!(
                matches!(result, Err(SdkError::InvalidConfiguration(_))),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_api_base_url_follows_emulator() {
        let client = FirebaseSdk::new().initialize_app(&demo_config()).unwrap();
        assert_eq!(client.api_base_url(), "https://identitytoolkit.googleapis.com");

        client.connect_emulator(&EmulatorEndpoint::local());
        assert_eq!(
            client.api_base_url(),
            "http://127.0.0.1:9099/identitytoolkit.googleapis.com"
        );
        assert_eq!(
            client.project_config_url(),
            "http://127.0.0.1:9099/identitytoolkit.googleapis.com/v1/projects?key=fake-api-key"
        );
    }

    #[test]
    fn test_first_emulator_connection_wins() {
        install_capturing_logger();
        let client = FirebaseSdk::new().initialize_app(&demo_config()).unwrap();

        client.connect_emulator(&EmulatorEndpoint::local());
        client.connect_emulator(&EmulatorEndpoint::local());
        client.connect_emulator(&EmulatorEndpoint::new("10.0.0.5", 9099));

        assert_eq!(client.emulator(), Some(EmulatorEndpoint::local()));

        // 연결 안내는 초기화 단계에서 한 번만 info로 남기므로 여기서는 debug
        let message = "Auth Emulator 엔드포인트 설정: http://127.0.0.1:9099";
        assert!(logged(log::Level::Debug, message));
        assert!(!logged(log::Level::Info, message));
        assert!(logged(
            log::Level::Warn,
            "⚠️ 이미 http://127.0.0.1:9099 에뮬레이터에 연결되어 있어 http://10.0.0.5:9099 요청을 무시합니다"
        ));
    }

    #[tokio::test]
    async fn test_fetch_project_config_unreachable_emulator() {
        let client = FirebaseSdk::with_timeout(Duration::from_secs(2))
            .initialize_app(&demo_config())
            .unwrap();
        // 1번 포트에는 아무것도 리스닝하지 않음
        client.connect_emulator(&EmulatorEndpoint::new("127.0.0.1", 1));

        let result = client.fetch_project_config().await;
        assert!(matches!(result, Err(SdkError::Network(_))));
    }

    #[tokio::test]
    async fn test_sign_in_and_sign_out_reach_observer() {
        let client = FirebaseSdk::new().initialize_app(&demo_config()).unwrap();
        let (observer, mut events) = RecordingObserver::new();
        let _subscription = client.on_auth_state_changed(observer).unwrap();

        assert!(events.recv().await.unwrap().user.is_none());

        let user = AuthUser::new("uid-7", "google.com").with_email("seo@example.com");
        assert!(client.update_current_user(Some(user.clone())));
        assert_eq!(events.recv().await.unwrap().user, Some(user));

        assert!(client.sign_out());
        assert!(events.recv().await.unwrap().user.is_none());
        assert!(!client.sign_out());
    }
}
