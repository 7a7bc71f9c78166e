//! # Utilities
//!
//! 공통 유틸리티 모음입니다.
//!
//! - [`string_utils`] - 환경 변수 값 정리, 호스트 형식 검사
//! - [`display_terminal`] - 시작 요약 출력
//!
//! ```rust,ignore
//! use crate::utils::string_utils::clean_optional_string;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let value = clean_optional_string(Some("  demo  ".to_string()));
//! print_boxed_title("System Initialized");
//! ```

pub mod string_utils;
pub mod display_terminal;
