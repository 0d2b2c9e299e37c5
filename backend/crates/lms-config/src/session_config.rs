use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Inactivity timeout constraints (minutes)
pub const MIN_TIMEOUT_MINUTES: u64 = 1;
pub const MAX_TIMEOUT_MINUTES: u64 = 24 * 60;
pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

// Warning lead time constraints (minutes)
pub const MIN_WARNING_MINUTES: u64 = 1;
pub const MAX_WARNING_MINUTES: u64 = 60;
pub const DEFAULT_WARNING_MINUTES: u64 = 5;

// Activity debounce constraints (seconds)
pub const MIN_DEBOUNCE_SECS: u64 = 1;
pub const MAX_DEBOUNCE_SECS: u64 = 600;
pub const DEFAULT_DEBOUNCE_SECS: u64 = 30;

/// Session inactivity settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Enable inactivity monitoring for signed-in sessions
    pub enabled: bool,
    /// Minutes of inactivity before forced sign-out
    pub timeout_minutes: u64,
    /// Minutes before the timeout at which the warning fires
    pub warning_minutes: u64,
    /// Minimum seconds between activity-driven clock resets
    pub debounce_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
            warning_minutes: DEFAULT_WARNING_MINUTES,
            debounce_secs: DEFAULT_DEBOUNCE_SECS,
        }
    }
}

impl SessionConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_minutes < MIN_TIMEOUT_MINUTES || self.timeout_minutes > MAX_TIMEOUT_MINUTES
        {
            return Err(ConfigError::session(format!(
                "session.timeout_minutes must be {}-{}, got {}",
                MIN_TIMEOUT_MINUTES, MAX_TIMEOUT_MINUTES, self.timeout_minutes
            )));
        }

        if self.warning_minutes < MIN_WARNING_MINUTES || self.warning_minutes > MAX_WARNING_MINUTES
        {
            return Err(ConfigError::session(format!(
                "session.warning_minutes must be {}-{}, got {}",
                MIN_WARNING_MINUTES, MAX_WARNING_MINUTES, self.warning_minutes
            )));
        }

        if self.debounce_secs < MIN_DEBOUNCE_SECS || self.debounce_secs > MAX_DEBOUNCE_SECS {
            return Err(ConfigError::session(format!(
                "session.debounce_secs must be {}-{}, got {}",
                MIN_DEBOUNCE_SECS, MAX_DEBOUNCE_SECS, self.debounce_secs
            )));
        }

        if self.warning_minutes >= self.timeout_minutes {
            return Err(ConfigError::session(format!(
                "session.warning_minutes ({}) must be less than timeout_minutes ({})",
                self.warning_minutes, self.timeout_minutes
            )));
        }

        // The debounce window must fit inside the armed period, otherwise a
        // single reset could never happen before the warning fires.
        if self.debounce_secs >= (self.timeout_minutes - self.warning_minutes) * 60 {
            return Err(ConfigError::session(format!(
                "session.debounce_secs ({}) must be less than the armed period ({}s)",
                self.debounce_secs,
                (self.timeout_minutes - self.warning_minutes) * 60
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_minutes * 60)
    }

    pub fn warning(&self) -> Duration {
        Duration::from_secs(self.warning_minutes * 60)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_secs(self.debounce_secs)
    }
}
