use crate::{
    ConfigError, ConfigErrorResult, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub environment: Environment,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for STASH_CONFIG_DIR env var, else use ./.stash/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

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
    /// Priority: STASH_CONFIG_DIR env var > ./.stash/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("STASH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".stash"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  environment: {}", self.environment);
        info!(
            "  server: {}:{} (body limit {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!(
            "  database: {} (pool {})",
            self.database.redacted_url(),
            self.database.max_connections
        );
        info!("  static dir: {}", self.server.static_dir);
        info!(
            "  logging: {} ({})",
            self.logging.level,
            match self.logging.file {
                Some(ref file) => file.as_str(),
                None => "stdout",
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Platform-conventional names first, so the STASH_* names win
        // when both are set.
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_string("DATABASE_URL", &mut self.database.url);

        // Server
        Self::apply_env_string("STASH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("STASH_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("STASH_STATIC_DIR", &mut self.server.static_dir);
        Self::apply_env_parse("STASH_MAX_BODY_BYTES", &mut self.server.max_body_bytes);

        // Database
        Self::apply_env_string("STASH_DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "STASH_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Environment
        Self::apply_env_parse("STASH_ENVIRONMENT", &mut self.environment);

        // Logging
        Self::apply_env_parse("STASH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("STASH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("STASH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored, keeping the current setting.
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }
}
