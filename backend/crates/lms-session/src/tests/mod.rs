mod registry;

use crate::{Result as SessionErrorResult, SessionError, SignOut};

use lms_core::Identity;

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Counts sign-out calls; optionally fails every call.
pub(crate) struct RecordingSignOut {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingSignOut {
    pub(crate) fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignOut for RecordingSignOut {
    async fn sign_out(&self, _identity: &Identity) -> SessionErrorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SessionError::SignOutFailed {
                message: "provider down".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

pub(crate) fn test_identity() -> Identity {
    Identity::new(Uuid::new_v4(), "student@school.example")
}

/// Let spawned monitor tasks observe whatever the paused clock just fired.
pub(crate) async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
