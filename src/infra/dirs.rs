//! Platform-specific directory management
//!
//! Provides the location of the global configuration directory.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! The `LEGOFLAKE_CONFIG_DIR` environment variable overrides the default.

use std::env;
use std::path::PathBuf;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "LEGOFLAKE_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "legoflake";

/// Global configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Platform-specific directory provider for legoflake
#[derive(Debug, Clone)]
pub struct LegoDirs {
    config_dir: PathBuf,
}

impl LegoDirs {
    /// Create a new `LegoDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Create an instance rooted at an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/legoflake` or `~/.config/legoflake`
    /// - macOS: `~/Library/Application Support/legoflake`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for LegoDirs {
    fn default() -> Self {
        Self::new()
    }
}
