//! # Auth Bootstrap
//!
//! 프로세스 시작 시 한 번 실행되는 Firebase 인증 초기화 절차입니다.
//!
//! ```text
//! EnvSource ─▶ ① 검증 ─▶ ② 설정 조립 ─▶ ③ 클라이언트 생성 ─▶ ④ 프로바이더 생성
//!                                                                   │
//!                       AuthContext ◀─ ⑥ 관찰자 등록 ◀─ ⑤ (개발 모드) 에뮬레이터 연결
//! ```
//!
//! - ①②에서 필수값이 하나라도 없으면 클라이언트를 만들지 않고 실패합니다.
//! - ③이 실패하면 에러를 로그로 남긴 뒤 그대로 반환합니다. 재시도는 없습니다.
//! - ⑤는 개발 모드에서만, 정확히 한 번 `127.0.0.1:9099`로 호출됩니다.
//! - 같은 [`AuthBootstrap`]에서 `initialize`를 다시 호출하면 이미 만든 컨텍스트를 그대로 반환합니다.
//!   실패한 시도는 아무것도 저장하지 않습니다.
//!
//! 전역 싱글톤 대신 [`AuthContext`]를 `Arc`로 반환하므로,
//! 바이너리가 한 번 만들어 필요한 곳에 명시적으로 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::ProcessEnv;
//! use crate::services::auth::{AuthBootstrap, FirebaseSdk};
//!
//! let bootstrap = AuthBootstrap::new(FirebaseSdk::new());
//! let context = bootstrap.initialize(&ProcessEnv)?;
//!
//! let client = context.client();
//! let provider = context.provider();
//! ```

use std::sync::Arc;

use log::{debug, error, info};
use once_cell::sync::OnceCell;

use crate::config::{EmulatorEndpoint, EnvSource, Environment, FirebaseConfig};
use crate::domain::models::oauth::GoogleAuthProvider;
use crate::errors::errors::BootstrapError;
use crate::services::auth::auth_state::{AuthStateObserver, AuthStateSubscription, LoggingObserver};
use crate::services::auth::sdk::{AuthClientHandle, AuthSdk};

/// 초기화가 끝난 인증 컨텍스트
///
/// 클라이언트 핸들과 프로바이더 디스크립터를 애플리케이션의 나머지 부분에 제공합니다.
#[derive(Debug)]
pub struct AuthContext<C> {
    client: Arc<C>,
    provider: GoogleAuthProvider,
    environment: Environment,
    emulator: Option<EmulatorEndpoint>,
    subscription: AuthStateSubscription,
}

impl<C: AuthClientHandle> AuthContext<C> {
    pub fn client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    pub fn provider(&self) -> &GoogleAuthProvider {
        &self.provider
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// 개발 모드에서 연결한 에뮬레이터 주소
    pub fn emulator(&self) -> Option<&EmulatorEndpoint> {
        self.emulator.as_ref()
    }

    pub fn config(&self) -> &FirebaseConfig {
        self.client.config()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_active()
    }
}

/// 인증 초기화 실행기
pub struct AuthBootstrap<S: AuthSdk> {
    sdk: S,
    observer: Arc<dyn AuthStateObserver>,
    context: OnceCell<Arc<AuthContext<S::Client>>>,
}

impl<S: AuthSdk> AuthBootstrap<S> {
    /// [`LoggingObserver`]를 관찰자로 사용하는 실행기를 생성합니다.
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            observer: Arc::new(LoggingObserver),
            context: OnceCell::new(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn AuthStateObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 인증 컨텍스트를 초기화합니다.
    ///
    /// 이미 초기화된 경우 아무 작업 없이 기존 컨텍스트를 반환합니다.
    /// tokio 런타임 안팎 어디에서나 호출할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `BootstrapError::MissingConfiguration` - 필수 환경 변수 누락
    /// * `BootstrapError::ClientConstruction` - SDK가 클라이언트 생성을 거부
    /// * `BootstrapError::ObserverRegistration` - 관찰자 task를 시작할 수 없음
    pub fn initialize(
        &self,
        env: &dyn EnvSource,
    ) -> Result<Arc<AuthContext<S::Client>>, BootstrapError> {
        if let Some(context) = self.context.get() {
            debug!("인증 컨텍스트가 이미 초기화되어 있습니다");
            return Ok(Arc::clone(context));
        }

        self.context
            .get_or_try_init(|| self.build(env).map(Arc::new))
            .cloned()
    }

    /// 초기화에 성공한 경우에만 컨텍스트를 반환합니다.
    pub fn context(&self) -> Option<Arc<AuthContext<S::Client>>> {
        self.context.get().cloned()
    }

    fn build(&self, env: &dyn EnvSource) -> Result<AuthContext<S::Client>, BootstrapError> {
        let config = FirebaseConfig::from_source(env)?;
        let environment = Environment::from_source(env);

        let client = self.sdk.initialize_app(&config).map_err(|e| {
            error!("❌ Error initializing Firebase: {}", e);
            BootstrapError::ClientConstruction(e)
        })?;

        let provider = GoogleAuthProvider::new();

        let emulator = if environment.is_development() {
            let endpoint = EmulatorEndpoint::local();
            client.connect_emulator(&endpoint);
            info!("🔌 Connected to Firebase Auth Emulator ({})", endpoint);
            Some(endpoint)
        } else {
            None
        };

        let subscription = client
            .on_auth_state_changed(Arc::clone(&self.observer))
            .map_err(|e| {
                error!("❌ 인증 상태 관찰자 등록 실패: {}", e);
                BootstrapError::ObserverRegistration(e)
            })?;

        info!(
            "✅ Firebase Auth 초기화 완료: project={}, environment={}",
            config.project_id,
            environment.as_str()
        );

        Ok(AuthContext {
            client: Arc::new(client),
            provider,
            environment,
            emulator,
            subscription,
        })
    }
}
