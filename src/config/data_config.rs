//! 실행 환경 및 서버 설정 관리 모듈
//!
//! 환경 변수 소스 추상화, 실행 모드 판별, HTTP 서버 바인딩 설정을 관리합니다.

use std::collections::HashMap;
use std::env;

use crate::utils::string_utils::clean_optional_string;

/// 키-값 형태의 환경 변수 저장소
///
/// 설정 로딩을 `std::env`에 직접 묶지 않기 위한 추상화입니다.
/// 프로세스 환경 변수는 [`ProcessEnv`], 테스트나 임베딩 환경에서는
/// `HashMap<String, String>`을 그대로 사용할 수 있습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use crate::config::EnvSource;
///
/// let mut vars = HashMap::<String, String>::new();
/// vars.insert("ENVIRONMENT".to_string(), "development".to_string());
///
/// assert_eq!(vars.var("ENVIRONMENT").as_deref(), Some("development"));
/// ```
pub trait EnvSource: Send + Sync {
    /// 원본 값을 그대로 반환합니다. 설정되지 않은 경우 `None`.
    fn raw(&self, key: &str) -> Option<String>;

    /// 앞뒤 공백을 제거한 값을 반환합니다.
    ///
    /// 빈 문자열이나 공백만 있는 값은 설정되지 않은 것으로 취급합니다.
    fn var(&self, key: &str) -> Option<String> {
        clean_optional_string(self.raw(key))
    }
}

/// 현재 프로세스의 환경 변수를 읽는 [`EnvSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn raw(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn raw(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - Auth Emulator로 연결됩니다
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 실제 Firebase 서비스 사용
    Production,
}

impl Environment {
    /// 주어진 환경 변수 소스에서 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::from_source(&ProcessEnv);
    /// if env.is_development() {
    ///     println!("Auth Emulator 사용");
    /// }
    /// ```
    pub fn from_source(source: &dyn EnvSource) -> Self {
        source
            .var("ENVIRONMENT")
            .or_else(|| source.var("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 프로필이 없거나 알 수 없을 때 읽는 기본 환경 파일
pub const DEFAULT_ENV_FILE: &str = ".env";

/// `PROFILE` 값에 맞는 환경 파일 이름을 반환합니다.
///
/// - `dev` → `.env.dev`
/// - `prod` → `.env.prod`
/// - 그 외 → `.env`
pub fn env_file_for_profile(profile: &str) -> &'static str {
    match profile.trim() {
        "dev" => ".env.dev",
        "prod" => ".env.prod",
        _ => DEFAULT_ENV_FILE,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port(source: &dyn EnvSource) -> u16 {
        source
            .var("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "127.0.0.1"
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host(source: &dyn EnvSource) -> String {
        source.var("HOST").unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn bind_address(source: &dyn EnvSource) -> String {
        format!("{}:{}", Self::host(source), Self::port(source))
    }
}
