//! 인증 DTO
//!
//! - [`firebase_response`] - Identity Toolkit REST 응답
//! - [`response`] - 이 서비스의 HTTP 응답

pub mod firebase_response;
pub mod response;
