use crate::{AuthError, Result as AuthErrorResult};

use lms_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims structure - matches the identity provider's token format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, UUID)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: format!("sub is not a valid UUID: {}", self.sub),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.email.len() > 320 {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Convert validated claims into the identity they describe.
    /// Fails only on a malformed `sub`.
    #[track_caller]
    pub fn to_identity(&self) -> AuthErrorResult<Identity> {
        let id = Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a valid UUID: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Identity {
            id,
            email: self.email.clone(),
            display_name: self.name.clone(),
        })
    }
}
