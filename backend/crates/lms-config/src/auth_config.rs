use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_DEV_USER_ID,
    MIN_JWT_SECRET_BYTES,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret (mutually exclusive with jwt_public_key_path)
    pub jwt_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Identity used when auth is disabled (local development)
    pub dev_user_id: Option<String>,
    /// Identity provider sign-out endpoint. None = local-only sign-out
    pub provider_sign_out_url: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            dev_user_id: None,
            provider_sign_out_url: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.enabled {
            match (&self.jwt_secret, &self.jwt_public_key_path) {
                (None, None) => {
                    return Err(ConfigError::auth(
                        "auth.enabled requires jwt_secret or jwt_public_key_path",
                    ));
                }
                (Some(_), Some(_)) => {
                    return Err(ConfigError::auth(
                        "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
                    ));
                }
                (Some(secret), None) => {
                    if secret.len() < MIN_JWT_SECRET_BYTES {
                        return Err(ConfigError::auth(format!(
                            "auth.jwt_secret must be at least {} bytes, got {}",
                            MIN_JWT_SECRET_BYTES,
                            secret.len()
                        )));
                    }
                }
                (None, Some(key_path)) => {
                    let full_path = config_dir.join(key_path);
                    if !full_path.exists() {
                        return Err(ConfigError::auth(format!(
                            "auth.jwt_public_key_path not found: {}",
                            full_path.display()
                        )));
                    }
                }
            }
        }

        if let Some(ref url) = self.provider_sign_out_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(ConfigError::auth(format!(
                "auth.provider_sign_out_url must be an http(s) URL, got {url}"
            )));
        }

        Ok(())
    }

    /// User id substituted for requests when auth is disabled.
    pub fn get_dev_user_id(&self) -> String {
        self.dev_user_id
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_DEV_USER_ID))
    }
}
