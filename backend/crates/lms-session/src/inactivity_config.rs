use std::time::Duration;

// Defaults match the hosted platform's session policy:
// - Force sign-out after 30 minutes without qualifying activity
// - Warn 5 minutes before the forced sign-out
// - Ignore activity within 30 seconds of the previous clock reset
const DEFAULT_TIMEOUT_SECS: u64 = 30 * 60;
const DEFAULT_WARNING_SECS: u64 = 5 * 60;
const DEFAULT_DEBOUNCE_SECS: u64 = 30;

/// Inactivity monitor timing configuration
#[derive(Debug, Clone)]
pub struct InactivityConfig {
    /// Inactivity span after which the session is signed out
    pub timeout: Duration,
    /// Lead time before `timeout` at which the warning fires
    pub warning: Duration,
    /// Minimum spacing between activity-driven clock resets
    pub debounce: Duration,
}

impl Default for InactivityConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            warning: Duration::from_secs(DEFAULT_WARNING_SECS),
            debounce: Duration::from_secs(DEFAULT_DEBOUNCE_SECS),
        }
    }
}

impl InactivityConfig {
    /// Span between the last activity and the warning deadline
    pub fn warning_lead(&self) -> Duration {
        self.timeout.saturating_sub(self.warning)
    }
}
