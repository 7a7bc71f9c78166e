//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계층별로 에러 타입을 분리합니다.
//!
//! | 타입 | 계층 | 설명 |
//! |------|------|------|
//! | [`SdkError`] | 외부 SDK | Firebase 클라이언트 생성/호출 실패 |
//! | [`BootstrapError`] | 시작 초기화 | 설정 누락, 클라이언트 생성 또는 관찰자 등록 실패 (항상 치명적) |
//! | [`AppError`] | HTTP | `actix_web::ResponseError`로 JSON 응답 변환 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::BootstrapError;
//!
//! match bootstrap.initialize(&ProcessEnv) {
//!     Ok(context) => run(context),
//!     Err(BootstrapError::MissingConfiguration(keys)) => eprintln!("누락: {:?}", keys),
//!     Err(e) => eprintln!("초기화 실패: {}", e),
//! }
//! ```

use thiserror::Error;

/// 외부 인증 SDK 에러
///
/// Firebase 클라이언트 생성이나 Identity Toolkit 호출 중 발생하는 오류입니다.
#[derive(Error, Debug)]
pub enum SdkError {
    /// 설정값 형식 오류 (잘못된 도메인, 프로젝트 ID 등)
    #[error("Invalid Firebase configuration: {0}")]
    InvalidConfiguration(String),

    /// 네트워크 또는 HTTP 클라이언트 오류
    #[error("Network error: {0}")]
    Network(String),

    /// 서비스가 2xx 이외의 상태 코드로 응답
    #[error("Firebase service responded with {status}: {message}")]
    Service { status: u16, message: String },

    /// 응답 본문 파싱 실패
    #[error("Failed to decode Firebase response: {0}")]
    Decode(String),

    /// 관찰자 task를 실행할 스레드나 런타임을 만들 수 없음
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// 시작 초기화 에러
///
/// 모든 경우 복구 불가능하며, 호출자는 프로세스 시작을 중단해야 합니다.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// 필수 환경 변수 누락 (선언 순서 유지)
    #[error(
        "Missing required environment variables: {}. Please check your .env file.",
        .0.join(", ")
    )]
    MissingConfiguration(Vec<&'static str>),

    /// 외부 SDK가 클라이언트 생성을 거부
    #[error("Error initializing Firebase: {0}")]
    ClientConstruction(#[source] SdkError),

    /// 인증 상태 관찰자 등록 실패
    #[error("Failed to observe auth state: {0}")]
    ObserverRegistration(#[source] SdkError),
}

/// HTTP 계층 에러
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 의존 서비스 준비 안 됨 (503 Service Unavailable)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<SdkError> for AppError {
    fn from(error: SdkError) -> Self {
        match &error {
            SdkError::Network(_) => AppError::ServiceUnavailable(error.to_string()),
            SdkError::Service { .. } | SdkError::Decode(_) => {
                AppError::ExternalServiceError(error.to_string())
            }
            SdkError::InvalidConfiguration(_) | SdkError::Runtime(_) => {
                AppError::InternalError(error.to_string())
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
