use std::time::Duration;

/// Events emitted by an inactivity monitor instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The warning deadline passed; `remaining` is the span left until
    /// forced sign-out unless activity resets the clock
    Warning { remaining: Duration },
    /// The inactivity timeout passed. Local state is cleared regardless of
    /// whether the identity provider acknowledged the sign-out
    Expired { provider_ack: bool },
}
