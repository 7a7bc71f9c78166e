//! 로그인한 사용자의 신원 정보

use serde::{Deserialize, Serialize};

/// Firebase가 전달하는 로그인 사용자 정보
///
/// Firebase JS SDK의 `User` 객체 중 관찰에 필요한 필드만 담습니다.
/// 토큰이나 자격 증명은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub email_verified: bool,

    /// 로그인에 사용된 프로바이더 (예: `google.com`)
    pub provider_id: String,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            photo_url: None,
            email_verified: false,
            provider_id: provider_id.into(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
