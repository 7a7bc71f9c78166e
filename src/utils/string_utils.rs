//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 옵셔널 문자열을 정리합니다.
///
/// 앞뒤 공백을 제거하고, 결과가 빈 문자열이면 `None`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  abc ".to_string())), Some("abc".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 공백 문자를 하나라도 포함하는지 확인합니다.
pub fn contains_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// 스킴(`https://`)이나 경로 없이 호스트 이름만 있는지 확인합니다.
pub fn is_bare_host(value: &str) -> bool {
    !value.is_empty()
        && !value.contains("://")
        && !value.contains('/')
        && !contains_whitespace(value)
}
