//! # Auth State Observation
//!
//! 인증 상태 전환(로그인/로그아웃)을 관찰자에게 전달하는 단방향 발행/구독 모듈입니다.
//! `tokio::sync::broadcast` 채널 위에 구성됩니다.
//!
//! ```text
//! ┌────────────────────┐  publish   ┌───────────┐  recv   ┌──────────────────┐
//! │ FirebaseAuthClient ├───────────>│ broadcast ├────────>│ observer task #1 │
//! └────────────────────┘            │  channel  ├────────>│ observer task #2 │
//!                                   └───────────┘         └──────────────────┘
//! ```
//!
//! ## 전달 규칙
//!
//! - 관찰자마다 별도의 task에서 실행되므로 느린 관찰자가 발행자를 막지 않습니다.
//! - tokio 런타임 밖에서 등록하면 전용 스레드가 task를 구동합니다.
//! - 등록 직후 현재 상태를 한 번 전달한 뒤, 이후 모든 전환을 전달합니다.
//! - 관찰자는 값을 반환하지 않습니다. 밀린 이벤트(`Lagged`)는 경고 로그 후 계속 진행합니다.
//! - 발행자가 drop되면 채널이 닫히고 관찰 task도 종료됩니다.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::runtime::{Builder, Handle};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::AbortHandle;

use crate::domain::models::auth::{AuthStateEvent, AuthUser};
use crate::errors::errors::SdkError;

/// 인증 상태 전환을 전달받는 관찰자
///
/// 부수 효과(로깅 등)만 수행해야 하며, 반환값은 호출자가 사용하지 않습니다.
#[async_trait]
pub trait AuthStateObserver: Send + Sync {
    async fn on_auth_state_changed(&self, event: &AuthStateEvent);
}

/// 로그인/로그아웃을 로그로 남기는 기본 관찰자
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

#[async_trait]
impl AuthStateObserver for LoggingObserver {
    async fn on_auth_state_changed(&self, event: &AuthStateEvent) {
        match event.user() {
            Some(user) => info!(
                "User is signed in: {}",
                user.email.as_deref().unwrap_or("(이메일 없음)")
            ),
            None => info!("User is signed out"),
        }
        debug!("인증 상태 관찰 시각: {}", event.observed_at.to_rfc3339());
    }
}

/// 관찰자 등록 핸들
///
/// drop해도 구독은 유지됩니다. 구독을 끝내려면 [`unsubscribe`](Self::unsubscribe)를 호출하세요.
#[derive(Debug)]
pub struct AuthStateSubscription {
    task: AbortHandle,
}

impl AuthStateSubscription {
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn unsubscribe(self) {
        self.task.abort();
    }
}

/// 현재 사용자 슬롯과 상태 전환 broadcast 채널
///
/// SDK 클라이언트 구현체가 내부적으로 보유합니다.
#[derive(Debug)]
pub struct AuthStatePublisher {
    sender: broadcast::Sender<AuthStateEvent>,
    current: RwLock<Option<AuthUser>>,
}

impl AuthStatePublisher {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            current: RwLock::new(None),
        }
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 현재 사용자를 갱신하고, 로그인 상태가 바뀐 경우에만 이벤트를 발행합니다.
    ///
    /// 같은 uid의 프로필만 바뀐 경우 슬롯은 갱신하지만 이벤트는 발행하지 않습니다.
    ///
    /// # Returns
    ///
    /// * `true` - 상태 전환이 발생하여 이벤트를 발행함
    /// * `false` - 전환 없음
    pub fn publish(&self, user: Option<AuthUser>) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let previous_uid = current.as_ref().map(|u| u.uid.as_str());
        let next_uid = user.as_ref().map(|u| u.uid.as_str());
        let transitioned = previous_uid != next_uid;

        *current = user.clone();

        if transitioned {
            // 구독자가 없으면 send는 실패하지만 무시해도 됩니다
            let delivered = self.sender.send(AuthStateEvent::new(user)).unwrap_or(0);
            debug!("인증 상태 전환 발행: {}명의 관찰자", delivered);
        }

        transitioned
    }

    /// 관찰자를 등록합니다.
    ///
    /// 현재 상태를 먼저 전달하고 이후 전환을 순서대로 전달하는 task를 생성합니다.
    /// tokio 런타임 안에서 호출되면 그 런타임에, 밖에서 호출되면 전용 스레드에서 실행됩니다.
    ///
    /// # Errors
    ///
    /// * `SdkError::Runtime` - 전용 스레드나 런타임을 만들 수 없는 경우
    pub fn subscribe(
        &self,
        observer: Arc<dyn AuthStateObserver>,
    ) -> Result<AuthStateSubscription, SdkError> {
        // 읽기 잠금 안에서 구독해야 스냅샷과 이후 이벤트 사이에 누락이 없습니다
        let (receiver, initial) = {
            let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
            (self.sender.subscribe(), AuthStateEvent::new(current.clone()))
        };

        let delivery = deliver(observer, initial, receiver);
        let task = match Handle::try_current() {
            Ok(handle) => handle.spawn(delivery).abort_handle(),
            Err(_) => spawn_dedicated(delivery)?,
        };

        Ok(AuthStateSubscription { task })
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AuthStatePublisher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

async fn deliver(
    observer: Arc<dyn AuthStateObserver>,
    initial: AuthStateEvent,
    mut receiver: broadcast::Receiver<AuthStateEvent>,
) {
    observer.on_auth_state_changed(&initial).await;

    loop {
        match receiver.recv().await {
            Ok(event) => observer.on_auth_state_changed(&event).await,
            Err(RecvError::Lagged(skipped)) => {
                warn!("⚠️ 인증 상태 관찰자가 {}개의 이벤트를 놓쳤습니다", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// 런타임 밖에서 등록된 관찰자를 전용 스레드의 current-thread 런타임에서 실행합니다.
///
/// 스레드는 채널이 닫히거나 구독이 취소되면 종료됩니다.
fn spawn_dedicated<F>(delivery: F) -> Result<AbortHandle, SdkError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let runtime = Builder::new_current_thread()
        .build()
        .map_err(|e| SdkError::Runtime(format!("관찰자 런타임 생성 실패: {}", e)))?;

    let task = runtime.spawn(delivery);
    let abort = task.abort_handle();

    thread::Builder::new()
        .name("auth-state-observer".to_string())
        .spawn(move || {
            let _ = runtime.block_on(task);
        })
        .map_err(|e| SdkError::Runtime(format!("관찰자 스레드 생성 실패: {}", e)))?;

    debug!("tokio 런타임이 없어 전용 스레드에서 인증 상태를 전달합니다");
    Ok(abort)
}


#[cfg(test)]
mod tests {
    use super::test_support::{install_capturing_logger, logged, RecordingObserver};
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    fn user(uid: &str) -> AuthUser {
        AuthUser::new(uid, "google.com").with_email(format!("{}@example.com", uid))
    }

    async fn next(receiver: &mut tokio::sync::mpsc::UnboundedReceiver<AuthStateEvent>) -> AuthStateEvent {
        timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("이벤트 대기 시간 초과")
            .expect("채널이 닫힘")
    }

    #[tokio::test]
    async fn test_observer_receives_initial_state_then_transitions() {
        let publisher = AuthStatePublisher::default();
        let (observer, mut events) = RecordingObserver::new();

        let _subscription = publisher.subscribe(observer).unwrap();

        // 최초 상태: 로그아웃
        assert!(next(&mut events).await.user.is_none());

        assert!(publisher.publish(Some(user("kim"))));
        let event = next(&mut events).await;
        assert_eq!(event.user().unwrap().email.as_deref(), Some("kim@example.com"));

        assert!(publisher.publish(None));
        assert!(!next(&mut events).await.is_signed_in());
    }

    #[tokio::test]
    async fn test_late_observer_sees_current_user_first() {
        let publisher = AuthStatePublisher::default();
        publisher.publish(Some(user("lee")));

        let (observer, mut events) = RecordingObserver::new();
        let _subscription = publisher.subscribe(observer).unwrap();

        assert_eq!(next(&mut events).await.user().unwrap().uid, "lee");
    }

    #[tokio::test]
    async fn test_same_uid_does_not_publish() {
        let publisher = AuthStatePublisher::default();
        let (observer, mut events) = RecordingObserver::new();
        let _subscription = publisher.subscribe(observer).unwrap();
        next(&mut events).await;

        assert!(publisher.publish(Some(user("park"))));
        assert!(!publisher.publish(Some(user("park").with_display_name("Park"))));
        assert!(!publisher.publish(Some(user("park"))));
        assert!(publisher.publish(Some(user("choi"))));

        assert_eq!(next(&mut events).await.user().unwrap().uid, "park");
        assert_eq!(next(&mut events).await.user().unwrap().uid, "choi");

        // 슬롯은 마지막 값으로 갱신됨
        assert_eq!(publisher.current_user().unwrap().uid, "choi");
    }

    #[tokio::test]
    async fn test_publish_without_observers() {
        let publisher = AuthStatePublisher::default();

        assert_eq!(publisher.observer_count(), 0);
        assert!(publisher.publish(Some(user("solo"))));
        assert_eq!(publisher.current_user().unwrap().uid, "solo");
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let publisher = AuthStatePublisher::default();
        let (observer, mut events) = RecordingObserver::new();

        let subscription = publisher.subscribe(observer).unwrap();
        next(&mut events).await;
        assert!(subscription.is_active());

        subscription.unsubscribe();

        // task가 취소되면 관찰자와 함께 채널 송신자도 drop됨
        let closed = timeout(Duration::from_secs(2), events.recv()).await;
        assert!(matches!(closed, Ok(None)));
        assert_eq!(publisher.observer_count(), 0);
        assert!(publisher.publish(Some(user("ghost"))));
    }

    #[tokio::test]
    async fn test_logging_observer_messages() {
        install_capturing_logger();
        let observer = LoggingObserver;

        let signed_in = AuthStateEvent::signed_in(user("log"));
        observer.on_auth_state_changed(&signed_in).await;
        observer.on_auth_state_changed(&AuthStateEvent::signed_out()).await;

        assert!(logged(log::Level::Info, "User is signed in: log@example.com"));
        assert!(logged(log::Level::Info, "User is signed out"));
        assert!(logged(
            log::Level::Debug,
            &format!("인증 상태 관찰 시각: {}", signed_in.observed_at.to_rfc3339())
        ));
    }

    #[test]
    fn test_subscribe_outside_runtime_uses_dedicated_thread() {
        let publisher = AuthStatePublisher::default();
        let (observer, mut events) = RecordingObserver::new();

        let subscription = publisher.subscribe(observer).unwrap();
        assert!(events.blocking_recv().unwrap().user.is_none());

        assert!(publisher.publish(Some(user("thread"))));
        assert_eq!(events.blocking_recv().unwrap().user().unwrap().uid, "thread");
        assert!(subscription.is_active());

        // 발행자가 사라지면 전용 스레드도 종료되고 관찰자가 drop됨
        drop(publisher);
        assert!(events.blocking_recv().is_none());
    }
}
