//! 인증 상태 관련 모델
//!
//! - [`auth_user::AuthUser`] - 로그인한 사용자의 신원 정보
//! - [`auth_state_event::AuthStateEvent`] - 로그인/로그아웃 전환 이벤트

pub mod auth_user;
pub mod auth_state_event;

pub use auth_state_event::AuthStateEvent;
pub use auth_user::AuthUser;
