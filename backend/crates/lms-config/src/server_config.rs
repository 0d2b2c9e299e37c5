use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_SESSIONS, DEFAULT_PORT,
    MAX_MAX_SESSIONS, MIN_MAX_SESSIONS, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrently tracked sessions
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        // Any other port must be >= MIN_PORT (1024).
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.max_sessions < MIN_MAX_SESSIONS || self.max_sessions > MAX_MAX_SESSIONS {
            return Err(ConfigError::config(format!(
                "server.max_sessions must be {}-{}, got {}",
                MIN_MAX_SESSIONS, MAX_MAX_SESSIONS, self.max_sessions
            )));
        }

        Ok(())
    }
}
