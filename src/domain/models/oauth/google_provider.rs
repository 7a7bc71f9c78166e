//! # Google Auth Provider
//!
//! Firebase에서 Google OAuth 로그인을 식별하는 프로바이더 디스크립터입니다.
//! 실제 OAuth 핸드셰이크는 Firebase가 수행하며, 이 값은 "어떤 방식으로 로그인할지"만
//! 나타냅니다. 생성 이후 별도의 생명주기가 없는 값 객체입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::models::oauth::GoogleAuthProvider;
//!
//! let provider = GoogleAuthProvider::new()
//!     .add_scope("https://www.googleapis.com/auth/contacts.readonly")
//!     .set_custom_parameters([("prompt", "select_account")]);
//!
//! assert_eq!(provider.provider_id(), "google.com");
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// Google OAuth 프로바이더 디스크립터
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthProvider {
    provider_id: &'static str,
    sign_in_method: &'static str,
    scopes: Vec<String>,
    custom_parameters: BTreeMap<String, String>,
}

impl GoogleAuthProvider {
    pub const PROVIDER_ID: &'static str = "google.com";
    pub const SIGN_IN_METHOD: &'static str = "google.com";

    /// 기본 스코프(`profile`)를 가진 디스크립터를 생성합니다.
    pub fn new() -> Self {
        Self {
            provider_id: Self::PROVIDER_ID,
            sign_in_method: Self::SIGN_IN_METHOD,
            scopes: Vec::new(),
            custom_parameters: BTreeMap::new(),
        }
        .add_scope("profile")
    }

    /// OAuth 스코프를 추가합니다. 이미 있는 스코프는 무시됩니다.
    pub fn add_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !scope.trim().is_empty() && !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    /// OAuth 요청에 추가할 커스텀 파라미터를 설정합니다. 기존 값은 교체됩니다.
    pub fn set_custom_parameters<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.custom_parameters = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider_id
    }

    /// 로그인 방식 식별자 (이메일 조회 결과의 `signInMethods`와 같은 값)
    pub fn sign_in_method(&self) -> &'static str {
        self.sign_in_method
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn custom_parameters(&self) -> &BTreeMap<String, String> {
        &self.custom_parameters
    }
}

impl Default for GoogleAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}
