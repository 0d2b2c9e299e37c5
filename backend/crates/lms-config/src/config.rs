use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
    SessionConfig,
};

use std::path::PathBuf;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for LMS_CONFIG_DIR env var, else use ./.lms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply LMS_* environment variable overrides
    /// 5. Check for legacy ~/.lms/config.toml and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Self::warn_legacy_config(&config_dir);

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LMS_CONFIG_DIR env var > ./.lms/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("LMS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".lms"))
    }

    /// Warn if a config file exists at the pre-0.1 location and is not the
    /// one being used.
    fn warn_legacy_config(config_dir: &std::path::Path) {
        if let Some(home) = dirs::home_dir() {
            let legacy = home.join(".lms").join("config.toml");
            if legacy.exists() && legacy.parent() != Some(config_dir) {
                warn!(
                    "Ignoring legacy config at {} (using {})",
                    legacy.display(),
                    config_dir.display()
                );
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.session.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} sessions)",
            self.server.host, self.server.port, self.server.max_sessions
        );
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            auth_type
        );

        info!(
            "  session: {} (timeout={}m, warning={}m, debounce={}s)",
            if self.session.enabled {
                "monitored"
            } else {
                "unmonitored"
            },
            self.session.timeout_minutes,
            self.session.warning_minutes,
            self.session.debounce_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("LMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("LMS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("LMS_SERVER_MAX_SESSIONS", &mut self.server.max_sessions);

        // Database
        Self::apply_env_string("LMS_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("LMS_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("LMS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "LMS_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("LMS_AUTH_DEV_USER_ID", &mut self.auth.dev_user_id);
        Self::apply_env_option_string(
            "LMS_AUTH_PROVIDER_SIGN_OUT_URL",
            &mut self.auth.provider_sign_out_url,
        );

        // Session
        Self::apply_env_bool("LMS_SESSION_ENABLED", &mut self.session.enabled);
        Self::apply_env_parse(
            "LMS_SESSION_TIMEOUT_MINUTES",
            &mut self.session.timeout_minutes,
        );
        Self::apply_env_parse(
            "LMS_SESSION_WARNING_MINUTES",
            &mut self.session.warning_minutes,
        );
        Self::apply_env_parse("LMS_SESSION_DEBOUNCE_SECS", &mut self.session.debounce_secs);

        // Logging
        Self::apply_env_parse("LMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LMS_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
