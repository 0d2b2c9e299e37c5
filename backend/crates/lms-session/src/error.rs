use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Sign-out failed: {message} {location}")]
    SignOutFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session limit exceeded: {current}/{max} {location}")]
    SessionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
