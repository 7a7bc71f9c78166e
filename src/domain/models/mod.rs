//! # Domain Models Module
//!
//! 인증 도메인의 값 객체를 정의합니다. 모두 불변이며 식별자보다 값 자체가 중요합니다.
//!
//! - [`auth`] - `AuthUser`, `AuthStateEvent`
//! - [`oauth`] - `GoogleAuthProvider`

pub mod auth;
pub mod oauth;
