//! # Auth SDK Seam
//!
//! 외부 인증 SDK와의 경계를 정의하는 trait 모음입니다.
//! 초기화 로직([`AuthBootstrap`](super::bootstrap::AuthBootstrap))은 이 trait에만 의존하므로
//! 실제 Firebase 클라이언트 대신 테스트 더블을 주입할 수 있습니다.
//!
//! | JS SDK | 이 모듈 |
//! |--------|---------|
//! | `initializeApp(config)` + `getAuth(app)` | [`AuthSdk::initialize_app`] |
//! | `connectAuthEmulator(auth, url)` | [`AuthClientHandle::connect_emulator`] |
//! | `auth.onAuthStateChanged(cb)` | [`AuthClientHandle::on_auth_state_changed`] |
//! | `auth.currentUser` | [`AuthClientHandle::current_user`] |

use std::sync::Arc;

use crate::config::{EmulatorEndpoint, FirebaseConfig};
use crate::domain::models::auth::AuthUser;
use crate::errors::errors::SdkError;
use crate::services::auth::auth_state::{AuthStateObserver, AuthStateSubscription};

/// 클라이언트 핸들을 생성하는 외부 SDK
pub trait AuthSdk: Send + Sync {
    type Client: AuthClientHandle + 'static;

    /// 설정으로 새 클라이언트 핸들을 생성합니다.
    ///
    /// # Errors
    ///
    /// 설정이 잘못되었거나 SDK가 초기화될 수 없는 경우 `SdkError`를 반환합니다.
    fn initialize_app(&self, config: &FirebaseConfig) -> Result<Self::Client, SdkError>;
}

/// 초기화된 인증 서비스 연결 컨텍스트
pub trait AuthClientHandle: Send + Sync {
    fn config(&self) -> &FirebaseConfig;

    /// 이후의 인증 요청을 로컬 에뮬레이터로 보냅니다.
    fn connect_emulator(&self, endpoint: &EmulatorEndpoint);

    fn current_user(&self) -> Option<AuthUser>;

    /// 인증 상태 전환마다 호출될 관찰자를 등록합니다.
    ///
    /// tokio 런타임 밖에서도 호출할 수 있어야 합니다.
    fn on_auth_state_changed(
        &self,
        observer: Arc<dyn AuthStateObserver>,
    ) -> Result<AuthStateSubscription, SdkError>;
}
