//! # Domain Layer Module
//!
//! 인증 초기화에서 주고받는 값 객체와 DTO를 정의하는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 인증 상태, 사용자 정보, 프로바이더 디스크립터
//! └── DTOs    - Identity Toolkit 응답, HTTP 응답
//!      │
//!      ▼
//! Application Layer (Services)
//! ```
//!
//! 영속성 엔티티는 없습니다. 사용자와 세션은 모두 Firebase가 보관합니다.

pub mod dto;
pub mod models;

pub use models::*;
