use crate::{Result as SessionErrorResult, SessionError};

use lms_core::Identity;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::json;

/// Revokes a session at the identity provider.
///
/// Implementations must be safe to call exactly once per expiring session;
/// callers clear local state whether or not the call succeeds.
#[async_trait]
pub trait SignOut: Send + Sync {
    async fn sign_out(&self, identity: &Identity) -> SessionErrorResult<()>;
}

/// Local-only sign-out, used when no provider endpoint is configured.
pub struct LocalSignOut;

#[async_trait]
impl SignOut for LocalSignOut {
    async fn sign_out(&self, identity: &Identity) -> SessionErrorResult<()> {
        log::info!("Local sign-out for {}", identity.id);
        Ok(())
    }
}

/// Response envelope returned by the provider's sign-out endpoint
#[derive(Debug, Deserialize)]
struct SignOutResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Sign-out via the identity provider's revocation endpoint
pub struct ProviderSignOut {
    client: reqwest::Client,
    url: String,
}

impl ProviderSignOut {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl SignOut for ProviderSignOut {
    async fn sign_out(&self, identity: &Identity) -> SessionErrorResult<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "user_id": identity.id }))
            .send()
            .await
            .map_err(|e| SessionError::SignOutFailed {
                message: format!("provider unreachable: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::SignOutFailed {
                message: format!("provider returned {status}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let envelope: SignOutResponse =
            response
                .json()
                .await
                .map_err(|e| SessionError::SignOutFailed {
                    message: format!("malformed provider response: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if !envelope.success {
            return Err(SessionError::SignOutFailed {
                message: envelope
                    .error
                    .unwrap_or_else(|| "provider rejected sign-out".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!("Provider acknowledged sign-out for {}", identity.id);
        Ok(())
    }
}
