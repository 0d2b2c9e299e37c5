use crate::{InactivityConfig, MonitorState, SessionEvent, SignOut};

use lms_core::Identity;

use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Per-session inactivity state machine.
///
/// A single tokio task owns the activity clock and the two deadlines, so at
/// most one outstanding warning and one outstanding expiry exist at any time
/// (reset-and-replace, never accumulate). Activity and stop requests reach
/// the task over channels.
pub struct InactivityMonitor;

impl InactivityMonitor {
    /// Arm the state machine for `identity`. Events are delivered on
    /// `events` until the instance expires or is stopped.
    pub fn start(
        identity: Identity,
        config: InactivityConfig,
        sign_out: Arc<dyn SignOut>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> MonitorHandle {
        let state = Arc::new(RwLock::new(MonitorState::Armed));
        let (activity_tx, activity_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);

        let task = tokio::spawn(run(
            identity,
            config.clone(),
            sign_out,
            events,
            state.clone(),
            activity_rx,
            stop_rx,
        ));

        MonitorHandle {
            state,
            config,
            last_reset: Mutex::new(Instant::now()),
            activity_tx,
            stop_tx,
            task,
        }
    }
}

/// Owning handle for one monitor instance. Dropping the handle disarms it.
pub struct MonitorHandle {
    state: Arc<RwLock<MonitorState>>,
    config: InactivityConfig,
    last_reset: Mutex<Instant>,
    activity_tx: mpsc::UnboundedSender<Instant>,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Report qualifying user activity. Returns whether the clock was
    /// reset: activity within the debounce window of the previous reset is
    /// ignored, as is activity after the instance reached a terminal state.
    pub fn on_activity(&self) -> bool {
        if matches!(
            self.state(),
            MonitorState::Expired | MonitorState::Disarmed
        ) {
            return false;
        }

        let now = Instant::now();
        let mut last_reset = self.last_reset.lock().unwrap();
        if now.duration_since(*last_reset) < self.config.debounce {
            return false;
        }
        *last_reset = now;
        drop(last_reset);

        // The task exits between the state read above and this send only on
        // stop or expiry; either way the reset no longer matters
        self.activity_tx.send(now).is_ok()
    }

    /// Disarm the state machine. Idempotent; no deadline fires afterwards.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Current state
    pub fn state(&self) -> MonitorState {
        *self.state.read().unwrap()
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.stop();
        self.task.abort();
    }
}

async fn run(
    identity: Identity,
    config: InactivityConfig,
    sign_out: Arc<dyn SignOut>,
    events: mpsc::UnboundedSender<SessionEvent>,
    state: Arc<RwLock<MonitorState>>,
    mut activity_rx: mpsc::UnboundedReceiver<Instant>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut last_activity = Instant::now();

    loop {
        let current = *state.read().unwrap();
        let deadline = match current {
            MonitorState::Armed => last_activity + config.warning_lead(),
            MonitorState::WarningShown => last_activity + config.timeout,
            MonitorState::Expired | MonitorState::Disarmed => break,
        };

        tokio::select! {
            // Stop always wins over a simultaneously-due deadline
            biased;

            _ = stop_rx.changed() => {
                *state.write().unwrap() = MonitorState::Disarmed;
                log::debug!("Inactivity monitor disarmed for {}", identity.id);
                break;
            }

            reset = activity_rx.recv() => {
                match reset {
                    Some(at) => {
                        last_activity = at;
                        *state.write().unwrap() = MonitorState::Armed;
                    }
                    None => {
                        // Handle dropped without an explicit stop
                        *state.write().unwrap() = MonitorState::Disarmed;
                        break;
                    }
                }
            }

            _ = time::sleep_until(deadline) => {
                match current {
                    MonitorState::Armed => {
                        *state.write().unwrap() = MonitorState::WarningShown;
                        log::info!(
                            "Inactivity warning for {} ({}s until sign-out)",
                            identity.id,
                            config.warning.as_secs()
                        );
                        let _ = events.send(SessionEvent::Warning {
                            remaining: config.warning,
                        });
                    }
                    MonitorState::WarningShown => {
                        *state.write().unwrap() = MonitorState::Expired;
                        log::warn!("Session expired after inactivity for {}", identity.id);

                        let provider_ack = match sign_out.sign_out(&identity).await {
                            Ok(()) => true,
                            Err(e) => {
                                log::warn!(
                                    "Sign-out call failed for {}: {e}; clearing local session anyway",
                                    identity.id
                                );
                                false
                            }
                        };

                        let _ = events.send(SessionEvent::Expired { provider_ack });
                        *state.write().unwrap() = MonitorState::Disarmed;
                        break;
                    }
                    MonitorState::Expired | MonitorState::Disarmed => break,
                }
            }
        }
    }
}
