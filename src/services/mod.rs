//! # Services
//!
//! 비즈니스 로직 계층입니다. 현재는 인증 초기화 서비스만 포함합니다.

pub mod auth;
