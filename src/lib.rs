//! Firebase 인증 초기화 서비스
//!
//! Firebase Authentication 클라이언트를 프로세스 시작 시 한 번 구성하고,
//! 그 결과를 애플리케이션의 나머지 부분에 명시적으로 전달합니다.
//!
//! # Features
//!
//! - **설정 검증**: 6개의 필수 환경 변수를 검사하고 누락된 키 전체를 한 번에 보고
//! - **클라이언트 생성**: Identity Toolkit 기반 클라이언트 핸들 (실패 시 로그 후 중단)
//! - **Google 프로바이더**: `google.com` 프로바이더 디스크립터
//! - **Auth Emulator**: 개발 모드에서 `127.0.0.1:9099`로 자동 연결
//! - **상태 관찰**: `tokio::sync::broadcast` 기반 로그인/로그아웃 구독
//! - **HTTP 노출**: 설정/상태 조회용 읽기 전용 REST API
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 읽기 전용 REST API
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthContext   │ ← client + provider + subscription
//! └─────────────────┘
//!          ▲
//!          │ initialize()
//! ┌─────────────────┐
//! │  AuthBootstrap  │ ← 검증 → 생성 → (에뮬레이터) → 관찰자 등록
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Firebase / 9099 │ ← 외부 인증 서비스
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use firebase_auth_bootstrap::config::ProcessEnv;
//! use firebase_auth_bootstrap::services::auth::{AuthBootstrap, FirebaseSdk};
//!
//! let context = AuthBootstrap::new(FirebaseSdk::new()).initialize(&ProcessEnv)?;
//!
//! let client = context.client();
//! let provider = context.provider();
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
