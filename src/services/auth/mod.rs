//! 인증 서비스 모듈
//!
//! Firebase Authentication 클라이언트를 초기화하고 인증 상태를 관찰하는 서비스들을 제공합니다.
//! 토큰 발급, 자격 증명 검증, 세션 저장은 모두 Firebase가 담당하며 이 모듈은 연결만 구성합니다.
//!
//! # Components
//!
//! - [`sdk`] - 외부 SDK 경계 trait (`AuthSdk`, `AuthClientHandle`)
//! - [`firebase_client`] - Identity Toolkit 기반 구현체
//! - [`auth_state`] - 인증 상태 발행/구독
//! - [`bootstrap`] - 시작 초기화 절차
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthBootstrap, FirebaseSdk};
//!
//! let context = AuthBootstrap::new(FirebaseSdk::new()).initialize(&ProcessEnv)?;
//! let client = context.client();
//! ```

pub mod sdk;
pub mod auth_state;
pub mod firebase_client;
pub mod bootstrap;

pub use sdk::*;
pub use auth_state::*;
pub use firebase_client::*;
pub use bootstrap::*;
