//! 인증 상태 변경 이벤트

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::auth::auth_user::AuthUser;

/// 로그인/로그아웃 전환 알림
///
/// `user`가 `Some`이면 로그인, `None`이면 로그아웃 상태입니다.
/// 저장되지 않는 일회성 값이며 관찰자에게 전달된 후 버려집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStateEvent {
    pub user: Option<AuthUser>,
    pub observed_at: DateTime<Utc>,
}

impl AuthStateEvent {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            user,
            observed_at: Utc::now(),
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self::new(Some(user))
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }
}
