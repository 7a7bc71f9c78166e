//! 에러 타입 모듈
//!
//! 자세한 내용은 [`errors`] 참고.

pub mod errors;

pub use errors::*;
