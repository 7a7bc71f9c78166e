//! HTTP 핸들러 모듈
//!
//! - [`auth`] - 인증 설정/상태 조회
//! - [`health`] - 생존/준비 확인
//!
//! 모든 핸들러는 `web::Data<FirebaseAuthContext>`로 초기화된 컨텍스트를 주입받습니다.

pub mod auth;
pub mod health;

use crate::services::auth::{AuthContext, FirebaseAuthClient};

/// 바이너리가 사용하는 인증 컨텍스트 타입
pub type FirebaseAuthContext = AuthContext<FirebaseAuthClient>;
