use serde::Serialize;

/// Inactivity monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorState {
    /// Timers running, no warning shown yet
    Armed,
    /// Warning fired; expiry is the next deadline
    WarningShown,
    /// Inactivity timeout reached; sign-out in progress
    Expired,
    /// No timers running. Terminal for this session instance
    Disarmed,
}

impl MonitorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armed => "armed",
            Self::WarningShown => "warning_shown",
            Self::Expired => "expired",
            Self::Disarmed => "disarmed",
        }
    }
}

impl std::fmt::Display for MonitorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
