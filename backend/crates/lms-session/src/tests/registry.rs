use crate::tests::{RecordingSignOut, settle, test_identity};
use crate::{
    AppliesTo, InactivityConfig, MonitorState, SessionError, SessionId, SessionLimits,
    SessionRegistry,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

const MINUTE: Duration = Duration::from_secs(60);

fn monitor_everyone() -> AppliesTo {
    Arc::new(|_| true)
}

fn monitor_no_one() -> AppliesTo {
    Arc::new(|_| false)
}

fn registry(applies_to: AppliesTo, sign_out: Arc<RecordingSignOut>) -> SessionRegistry {
    SessionRegistry::new(
        SessionLimits::default(),
        InactivityConfig {
            timeout: 30 * MINUTE,
            warning: 5 * MINUTE,
            debounce: Duration::from_secs(30),
        },
        applies_to,
        sign_out,
    )
}

#[tokio::test(start_paused = true)]
async fn given_monitored_identity_when_registered_then_armed() {
    let registry = registry(monitor_everyone(), RecordingSignOut::succeeding());

    let session_id = registry.register(test_identity()).await.unwrap();

    let info = registry.info(session_id).await.unwrap();
    assert_eq!(info.state, MonitorState::Armed);
    assert_eq!(registry.total_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn given_unmonitored_identity_when_registered_then_disarmed() {
    let registry = registry(monitor_no_one(), RecordingSignOut::succeeding());

    let session_id = registry.register(test_identity()).await.unwrap();

    let info = registry.info(session_id).await.unwrap();
    assert_eq!(info.state, MonitorState::Disarmed);

    // The session is still tracked; activity is simply a no-op
    assert!(registry.touch(session_id).await);
}

#[tokio::test(start_paused = true)]
async fn given_unknown_session_when_touched_then_false() {
    let registry = registry(monitor_everyone(), RecordingSignOut::succeeding());

    assert!(!registry.touch(SessionId::new()).await);
    assert!(registry.info(SessionId::new()).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn given_full_registry_when_registered_then_limit_error() {
    let sign_out = RecordingSignOut::succeeding();
    let registry = SessionRegistry::new(
        SessionLimits { max_total: 1 },
        InactivityConfig::default(),
        monitor_everyone(),
        sign_out,
    );

    registry.register(test_identity()).await.unwrap();
    let result = registry.register(test_identity()).await;

    assert!(matches!(
        result,
        Err(SessionError::SessionLimitExceeded { current: 1, max: 1, .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn given_removed_session_when_removed_again_then_none() {
    let registry = registry(monitor_everyone(), RecordingSignOut::succeeding());
    let session_id = registry.register(test_identity()).await.unwrap();

    assert!(registry.remove(session_id).await.is_some());
    assert!(registry.remove(session_id).await.is_none());
    assert_eq!(registry.total_count().await, 0);
}

#[tokio::test(start_paused = true)]
async fn given_expired_monitor_then_registry_entry_cleared() {
    let sign_out = RecordingSignOut::succeeding();
    let registry = registry(monitor_everyone(), sign_out.clone());
    let session_id = registry.register(test_identity()).await.unwrap();

    // Let the spawned monitor task arm its initial deadline before the clock moves
    settle().await;
    time::advance(30 * MINUTE).await;
    settle().await;

    assert_eq!(sign_out.calls(), 1);
    assert!(registry.info(session_id).await.is_none());
    assert_eq!(registry.total_count().await, 0);
}

#[tokio::test(start_paused = true)]
async fn given_touched_session_then_expiry_deferred() {
    let sign_out = RecordingSignOut::succeeding();
    let registry = registry(monitor_everyone(), sign_out.clone());
    let session_id = registry.register(test_identity()).await.unwrap();

    time::advance(29 * MINUTE).await;
    settle().await;
    assert!(registry.touch(session_id).await);
    settle().await;

    time::advance(29 * MINUTE).await;
    settle().await;

    assert_eq!(sign_out.calls(), 0);
    assert_eq!(registry.total_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn given_explicit_sign_out_then_local_state_cleared_and_ack_reported() {
    let sign_out = RecordingSignOut::succeeding();
    let registry = registry(monitor_everyone(), sign_out.clone());
    let session_id = registry.register(test_identity()).await.unwrap();

    let ack = registry.sign_out(session_id).await;

    assert_eq!(ack, Some(true));
    assert_eq!(sign_out.calls(), 1);
    assert_eq!(registry.total_count().await, 0);

    // Second sign-out finds nothing to clear
    assert_eq!(registry.sign_out(session_id).await, None);
}

#[tokio::test(start_paused = true)]
async fn given_provider_failure_when_signing_out_then_local_state_still_cleared() {
    let sign_out = RecordingSignOut::failing();
    let registry = registry(monitor_everyone(), sign_out.clone());
    let session_id = registry.register(test_identity()).await.unwrap();

    let ack = registry.sign_out(session_id).await;

    assert_eq!(ack, Some(false));
    assert_eq!(registry.total_count().await, 0);
}
