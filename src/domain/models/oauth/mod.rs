//! # OAuth Provider Models
//!
//! Firebase에 전달할 연합 로그인 프로바이더 디스크립터입니다.
//! 현재는 Google만 지원합니다.

pub mod google_provider;

pub use google_provider::GoogleAuthProvider;
