//! # Firebase Configuration Module
//!
//! Firebase 웹 앱 설정(Configuration Record)과 Auth Emulator 엔드포인트를 관리하는 모듈입니다.
//! Firebase 콘솔의 "프로젝트 설정 > 내 앱"에서 확인할 수 있는 6개의 값을
//! 환경 변수에서 읽어 타입이 지정된 [`FirebaseConfig`]로 조립합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export FIREBASE_API_KEY="AIzaSy..."
//! export FIREBASE_AUTH_DOMAIN="your-project.firebaseapp.com"
//! export FIREBASE_PROJECT_ID="your-project"
//! export FIREBASE_STORAGE_BUCKET="your-project.appspot.com"
//! export FIREBASE_MESSAGING_SENDER_ID="123456789012"
//! export FIREBASE_APP_ID="1:123456789012:web:abcdef"
//! ```
//!
//! 하나라도 누락되면 누락된 키 목록 전체를 담은
//! [`BootstrapError::MissingConfiguration`]으로 실패합니다.
//! 부분적으로 채워진 설정은 절대 반환되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{FirebaseConfig, ProcessEnv};
//!
//! let config = FirebaseConfig::from_source(&ProcessEnv)?;
//! println!("Firebase project: {}", config.project_id);
//! ```

use std::fmt;

use serde::Serialize;

use crate::config::EnvSource;
use crate::errors::errors::BootstrapError;

/// 필수 환경 변수 목록 (선언 순서가 에러 메시지의 순서가 됩니다)
pub const REQUIRED_ENV_VARS: [&str; 6] = [
    "FIREBASE_API_KEY",
    "FIREBASE_AUTH_DOMAIN",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_STORAGE_BUCKET",
    "FIREBASE_MESSAGING_SENDER_ID",
    "FIREBASE_APP_ID",
];

/// Firebase 웹 앱 설정
///
/// 직렬화 시 Firebase JS SDK의 `firebaseConfig` 객체와 동일한 camelCase 필드명을 사용하므로
/// 프론트엔드에 그대로 전달할 수 있습니다. 웹 API 키는 클라이언트에 공개되는 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl FirebaseConfig {
    /// 환경 변수 소스에서 설정을 로드합니다.
    ///
    /// 모든 키를 먼저 검사한 뒤, 누락된 키가 하나라도 있으면
    /// [`REQUIRED_ENV_VARS`] 순서대로 누락된 키만 모아서 에러를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `BootstrapError::MissingConfiguration` - 값이 없거나 공백뿐인 키가 있는 경우
    pub fn from_source(source: &dyn EnvSource) -> Result<Self, BootstrapError> {
        let values: Vec<Option<String>> = REQUIRED_ENV_VARS
            .iter()
            .map(|key| source.var(key))
            .collect();

        let missing: Vec<&'static str> = REQUIRED_ENV_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            return Err(BootstrapError::MissingConfiguration(missing));
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();

        Ok(Self {
            api_key: next(),
            auth_domain: next(),
            project_id: next(),
            storage_bucket: next(),
            messaging_sender_id: next(),
            app_id: next(),
        })
    }
}

/// 로컬 Auth Emulator 엔드포인트
///
/// 개발 모드에서만 사용되며, 주소는 `http://127.0.0.1:9099`로 고정되어 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmulatorEndpoint {
    pub host: String,
    pub port: u16,
}

impl EmulatorEndpoint {
    pub const LOOPBACK_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9099;

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// 고정된 로컬 에뮬레이터 주소 (`127.0.0.1:9099`)
    pub fn local() -> Self {
        Self::new(Self::LOOPBACK_HOST, Self::DEFAULT_PORT)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for EmulatorEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
