use crate::{
    InactivityConfig, InactivityMonitor, MonitorHandle, MonitorState,
    Result as SessionErrorResult, SessionError, SessionEvent, SessionId, SessionInfo,
    SessionLimits, SignOut,
};

use lms_core::Identity;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::{RwLock, mpsc};

/// Predicate selecting which identities are subject to inactivity monitoring
pub type AppliesTo = Arc<dyn Fn(&Identity) -> bool + Send + Sync>;

/// Registry for tracking active authenticated sessions
pub struct SessionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: SessionLimits,
    config: InactivityConfig,
    applies_to: AppliesTo,
    sign_out: Arc<dyn SignOut>,
}

struct RegistryInner {
    /// All active sessions by session_id
    sessions: HashMap<SessionId, SessionEntry>,
}

struct SessionEntry {
    identity: Identity,
    /// None when the applies-to predicate rejected the identity
    monitor: Option<MonitorHandle>,
    started_at: DateTime<Utc>,
}

impl SessionRegistry {
    pub fn new(
        limits: SessionLimits,
        config: InactivityConfig,
        applies_to: AppliesTo,
        sign_out: Arc<dyn SignOut>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                sessions: HashMap::new(),
            })),
            limits,
            config,
            applies_to,
            sign_out,
        }
    }

    /// Register a session, returns SessionId if successful.
    /// Arms an inactivity monitor when the applies-to predicate matches.
    pub async fn register(&self, identity: Identity) -> SessionErrorResult<SessionId> {
        let mut inner = self.inner.write().await;

        // Check total session limit
        if inner.sessions.len() >= self.limits.max_total {
            warn!(
                "Session limit reached: {}/{}",
                inner.sessions.len(),
                self.limits.max_total
            );
            return Err(SessionError::SessionLimitExceeded {
                current: inner.sessions.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let session_id = SessionId::new();

        let monitor = if (self.applies_to)(&identity) {
            let (events_tx, events_rx) = mpsc::unbounded_channel();
            let handle = InactivityMonitor::start(
                identity.clone(),
                self.config.clone(),
                self.sign_out.clone(),
                events_tx,
            );
            tokio::spawn(watch_events(session_id, events_rx, self.inner.clone()));
            Some(handle)
        } else {
            info!("Session for {} not subject to monitoring", identity.id);
            None
        };

        inner.sessions.insert(
            session_id,
            SessionEntry {
                identity,
                monitor,
                started_at: Utc::now(),
            },
        );
        info!(
            "Registered session {session_id} ({} total)",
            inner.sessions.len()
        );

        Ok(session_id)
    }

    /// Forward qualifying activity to the session's monitor.
    /// Returns false for unknown sessions.
    pub async fn touch(&self, session_id: SessionId) -> bool {
        let inner = self.inner.read().await;
        match inner.sessions.get(&session_id) {
            Some(entry) => {
                if let Some(monitor) = &entry.monitor {
                    monitor.on_activity();
                }
                true
            }
            None => false,
        }
    }

    /// Snapshot of a tracked session
    pub async fn info(&self, session_id: SessionId) -> Option<SessionInfo> {
        let inner = self.inner.read().await;
        inner.sessions.get(&session_id).map(|entry| SessionInfo {
            session_id,
            identity: entry.identity.clone(),
            state: entry
                .monitor
                .as_ref()
                .map(|m| m.state())
                .unwrap_or(MonitorState::Disarmed),
            started_at: entry.started_at,
        })
    }

    /// Remove a session and disarm its monitor. Idempotent.
    pub async fn remove(&self, session_id: SessionId) -> Option<Identity> {
        let mut inner = self.inner.write().await;

        inner.sessions.remove(&session_id).map(|entry| {
            if let Some(monitor) = &entry.monitor {
                monitor.stop();
            }
            info!(
                "Removed session {session_id} ({} remaining)",
                inner.sessions.len()
            );
            entry.identity
        })
    }

    /// Explicit user sign-out: local state is cleared first, then the
    /// provider is notified. Returns whether the provider acknowledged, or
    /// None for unknown sessions.
    pub async fn sign_out(&self, session_id: SessionId) -> Option<bool> {
        let identity = self.remove(session_id).await?;

        match self.sign_out.sign_out(&identity).await {
            Ok(()) => Some(true),
            Err(e) => {
                warn!(
                    "Provider sign-out failed for {}: {e}; local session already cleared",
                    identity.id
                );
                Some(false)
            }
        }
    }

    /// Get total session count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.sessions.len()
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
            config: self.config.clone(),
            applies_to: self.applies_to.clone(),
            sign_out: self.sign_out.clone(),
        }
    }
}

/// Consume a monitor's events: log warnings, clear the registry entry on
/// expiry. Exits when the monitor is dropped.
async fn watch_events(
    session_id: SessionId,
    mut events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    inner: Arc<RwLock<RegistryInner>>,
) {
    while let Some(event) = events_rx.recv().await {
        match event {
            SessionEvent::Warning { remaining } => {
                info!(
                    "Session {session_id} idle; sign-out in {}s without activity",
                    remaining.as_secs()
                );
            }
            SessionEvent::Expired { provider_ack } => {
                let mut guard = inner.write().await;
                if guard.sessions.remove(&session_id).is_some() {
                    info!(
                        "Session {session_id} expired (provider_ack: {provider_ack}, {} remaining)",
                        guard.sessions.len()
                    );
                }
                break;
            }
        }
    }
}
