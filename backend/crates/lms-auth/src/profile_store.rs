use lms_core::Profile;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Transient failure while reading a profile. The guard treats this as a
/// denial, never as an implicit allow.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Profile lookup failed: {message} {location}")]
    Transient {
        message: String,
        location: ErrorLocation,
    },
}

impl LookupError {
    #[track_caller]
    pub fn transient<S: Into<String>>(message: S) -> Self {
        Self::Transient {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Single-row profile read keyed by identity id.
///
/// `Ok(None)` means no profile row exists for the identity; the guard
/// resolves that to the lowest-privilege role.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_profile(&self, id: Uuid) -> Result<Option<Profile>, LookupError>;
}
