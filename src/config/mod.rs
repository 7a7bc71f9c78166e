//! # Configuration Module
//!
//! Firebase 인증 초기화에 필요한 설정을 관리하는 모듈입니다.
//! 모든 설정값은 프로세스 시작 시 한 번 [`EnvSource`]에서 읽어
//! 타입이 지정된 값으로 변환되며, 필수값 누락은 복구 불가능한 시작 실패로 처리됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경 변수 소스, 실행 환경, 서버 바인딩 설정
//! - [`firebase_config`] - Firebase 웹 앱 설정, Auth Emulator 엔드포인트
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 접근 분리
//!
//! 설정 로딩은 `std::env`에 직접 의존하지 않고 [`EnvSource`] trait을 통해 이루어집니다.
//! 바이너리는 [`ProcessEnv`]를, 테스트는 `HashMap<String, String>`을 사용합니다.
//!
//! ### 2. Fail-Fast
//!
//! - 필수값 누락 시 누락된 키 전체를 한 번에 보고
//! - 부분적으로 초기화된 설정은 존재하지 않음
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # Firebase 웹 앱 설정 (필수)
//! export FIREBASE_API_KEY="..."
//! export FIREBASE_AUTH_DOMAIN="your-project.firebaseapp.com"
//! export FIREBASE_PROJECT_ID="your-project"
//! export FIREBASE_STORAGE_BUCKET="your-project.appspot.com"
//! export FIREBASE_MESSAGING_SENDER_ID="123456789012"
//! export FIREBASE_APP_ID="1:123456789012:web:abcdef"
//!
//! # 실행 환경 (development 이면 Auth Emulator 사용)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정 (선택)
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! ```

pub mod data_config;
pub mod firebase_config;

pub use data_config::*;
pub use firebase_config::*;
