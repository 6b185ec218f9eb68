//! Global configuration management
//!
//! Reads user-wide settings from `config.toml` in the config directory:
//! the default project root, defaults for new presets, and build
//! preferences. Every setting is optional.

use crate::core::preset::PresetDefaults;
use crate::infra::dirs::LegoDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for legoflake
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    /// Project location
    #[serde(default)]
    pub project: ProjectConfig,

    /// Defaults for new presets
    #[serde(default)]
    pub preset: PresetConfig,

    /// Build preferences
    #[serde(default)]
    pub build: BuildConfig,
}

/// Project location settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Project root used when neither `--root` nor the environment names one
    pub root: Option<PathBuf>,
}

/// Defaults for `preset new` and `module new`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PresetConfig {
    /// Default user name
    pub user: Option<String>,

    /// Default module author
    pub author: Option<String>,

    /// NixOS state version
    pub state_version: Option<String>,

    /// Time zone
    pub timezone: Option<String>,

    /// Default system locale
    pub default_locale: Option<String>,

    /// Locale used for every `LC_*` category
    pub extra_locale: Option<String>,

    /// Console keymap
    pub keymap: Option<String>,
}

/// Build preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Stage every build as the root flake by default
    pub stage: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    pub fn load(dirs: &LegoDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Preset defaults with configured values layered over the built-in ones
    pub fn preset_defaults(&self) -> PresetDefaults {
        let mut defaults = PresetDefaults::default();
        let p = &self.preset;
        if let Some(v) = &p.state_version {
            defaults.state_version.clone_from(v);
        }
        if let Some(v) = &p.timezone {
            defaults.timezone.clone_from(v);
        }
        if let Some(v) = &p.default_locale {
            defaults.default_locale.clone_from(v);
        }
        if let Some(v) = &p.extra_locale {
            defaults.extra_locale.clone_from(v);
        }
        if let Some(v) = &p.keymap {
            defaults.keymap.clone_from(v);
        }
        defaults
    }

    /// Whether builds are staged unless asked otherwise
    pub fn stage_by_default(&self) -> bool {
        self.build.stage.unwrap_or(false)
    }
}
