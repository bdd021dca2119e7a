mod config;
mod database;

use std::env;

use tempfile::TempDir;

/// Every variable Config::load() reads. Tests scrub these so ambient
/// values (a developer's DATABASE_URL, a CI PORT) cannot leak in.
const CONFIG_ENV_VARS: &[&str] = &[
    "PORT",
    "DATABASE_URL",
    "STASH_SERVER_HOST",
    "STASH_SERVER_PORT",
    "STASH_STATIC_DIR",
    "STASH_MAX_BODY_BYTES",
    "STASH_DATABASE_URL",
    "STASH_DATABASE_MAX_CONNECTIONS",
    "STASH_ENVIRONMENT",
    "STASH_LOG_LEVEL",
    "STASH_LOG_COLORED",
    "STASH_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Remove all config-related variables for the duration of a test
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    CONFIG_ENV_VARS.iter().copied().map(EnvGuard::remove).collect()
}

/// Create a temp config directory and point STASH_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("STASH_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
