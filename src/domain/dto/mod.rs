//! # Data Transfer Objects
//!
//! 외부 서비스 응답과 이 서비스의 HTTP 응답 형식을 정의합니다.
//! 모든 JSON 필드는 Firebase와 동일하게 camelCase를 사용합니다.

pub mod auth;
