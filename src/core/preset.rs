//! Preset (presets/<name>.toml) storage
//!
//! A preset holds everything host-specific: identity, user, locale, the list
//! of active modules from the last build, and bookkeeping timestamps. There
//! is no cache: every call reads or writes the file.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DEFAULT_EXTRA_LOCALE, DEFAULT_KEYMAP, DEFAULT_LOCALE, DEFAULT_STATE_VERSION, DEFAULT_TIMEZONE,
};
use crate::config::paths::PRESET_EXTENSION;
use crate::core::module::ModuleId;
use crate::core::template::{Placeholder, Substitutions};
use crate::error::PresetError;
use crate::infra::filesystem;

/// A host configuration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Host identity
    pub host: HostConfig,

    /// Primary user
    pub user: UserConfig,

    /// Locale settings
    pub locale: LocaleConfig,

    /// Active modules
    #[serde(default)]
    pub modules: ModulesConfig,

    /// Timestamps and last build
    pub metadata: MetadataConfig,
}

/// Host identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Preset name (also the artifact file name prefix)
    pub preset_name: String,

    /// Host name used for `nixosConfigurations`
    pub host_name: String,

    /// NixOS `system.stateVersion`
    pub state_version: String,
}

/// Primary user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Login name
    pub name: String,

    /// Full name / description
    #[serde(default)]
    pub description: String,
}

/// Locale settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub timezone: String,
    pub default_locale: String,
    pub lc_address: String,
    pub lc_identification: String,
    pub lc_measurement: String,
    pub lc_monetary: String,
    pub lc_name: String,
    pub lc_numeric: String,
    pub lc_paper: String,
    pub lc_telephone: String,
    pub lc_time: String,
    pub keymap: String,
}

/// Active module list, in build order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesConfig {
    #[serde(default)]
    pub active: Vec<ModuleId>,
}

/// Timestamps and last build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// When the preset was created
    pub created_at: DateTime<Utc>,

    /// When the preset was last saved
    pub last_modified: DateTime<Utc>,

    /// File name of the last generated flake
    #[serde(default)]
    pub last_applied_flake: String,
}

/// Defaults applied to new presets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetDefaults {
    pub state_version: String,
    pub timezone: String,
    pub default_locale: String,
    pub extra_locale: String,
    pub keymap: String,
}

impl Default for PresetDefaults {
    fn default() -> Self {
        Self {
            state_version: DEFAULT_STATE_VERSION.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            extra_locale: DEFAULT_EXTRA_LOCALE.to_string(),
            keymap: DEFAULT_KEYMAP.to_string(),
        }
    }
}

/// Listing entry for one stored preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    /// Preset name (file stem)
    pub name: String,
    /// Path to the preset file
    pub path: PathBuf,
    /// File modification time
    pub modified: DateTime<Utc>,
}

/// Scalar fields editable through `preset set`
pub const EDITABLE_FIELDS: &[&str] = &[
    "host_name",
    "state_version",
    "user_name",
    "user_description",
    "timezone",
    "default_locale",
    "lc_address",
    "lc_identification",
    "lc_measurement",
    "lc_monetary",
    "lc_name",
    "lc_numeric",
    "lc_paper",
    "lc_telephone",
    "lc_time",
    "keymap",
];

impl Preset {
    /// Create a preset with the built-in defaults
    pub fn new_default(name: &str, user: &str) -> Self {
        Self::with_defaults(name, user, &PresetDefaults::default())
    }

    /// Create a preset from explicit defaults
    pub fn with_defaults(name: &str, user: &str, defaults: &PresetDefaults) -> Self {
        let now = Utc::now();
        let extra = || defaults.extra_locale.clone();
        Self {
            host: HostConfig {
                preset_name: name.to_string(),
                host_name: name.to_string(),
                state_version: defaults.state_version.clone(),
            },
            user: UserConfig {
                name: user.to_string(),
                description: user.to_string(),
            },
            locale: LocaleConfig {
                timezone: defaults.timezone.clone(),
                default_locale: defaults.default_locale.clone(),
                lc_address: extra(),
                lc_identification: extra(),
                lc_measurement: extra(),
                lc_monetary: extra(),
                lc_name: extra(),
                lc_numeric: extra(),
                lc_paper: extra(),
                lc_telephone: extra(),
                lc_time: extra(),
                keymap: defaults.keymap.clone(),
            },
            modules: ModulesConfig::default(),
            metadata: MetadataConfig {
                created_at: now,
                last_modified: now,
                last_applied_flake: String::new(),
            },
        }
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a preset file
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        if !path.exists() {
            return Err(PresetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| PresetError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| PresetError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Stamp `last_modified` and write the preset, replacing any existing file.
    ///
    /// The new stamp is strictly later than the previous one even when the
    /// clock has not advanced.
    pub fn save(&mut self, path: &Path) -> Result<(), PresetError> {
        let previous = self.metadata.last_modified;
        let now = Utc::now();
        self.metadata.last_modified = if now > previous {
            now
        } else {
            previous + Duration::microseconds(1)
        };

        let content = self.to_toml().map_err(|e| PresetError::Serialize {
            error: e.to_string(),
        })?;
        filesystem::write_file_atomic(path, &content).map_err(|e| PresetError::Write {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Update one scalar field by name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), PresetError> {
        let slot = match field {
            "host_name" => &mut self.host.host_name,
            "state_version" => &mut self.host.state_version,
            "user_name" => &mut self.user.name,
            "user_description" => &mut self.user.description,
            "timezone" => &mut self.locale.timezone,
            "default_locale" => &mut self.locale.default_locale,
            "lc_address" => &mut self.locale.lc_address,
            "lc_identification" => &mut self.locale.lc_identification,
            "lc_measurement" => &mut self.locale.lc_measurement,
            "lc_monetary" => &mut self.locale.lc_monetary,
            "lc_name" => &mut self.locale.lc_name,
            "lc_numeric" => &mut self.locale.lc_numeric,
            "lc_paper" => &mut self.locale.lc_paper,
            "lc_telephone" => &mut self.locale.lc_telephone,
            "lc_time" => &mut self.locale.lc_time,
            "keymap" => &mut self.locale.keymap,
            _ => {
                return Err(PresetError::UnknownField {
                    field: field.to_string(),
                })
            }
        };
        *slot = value.to_string();
        Ok(())
    }

    /// Placeholder values for every scalar field
    pub fn substitutions(&self) -> Substitutions {
        let mut subs = Substitutions::new();
        subs.set(Placeholder::PresetName, &self.host.preset_name)
            .set(Placeholder::HostName, &self.host.host_name)
            .set(Placeholder::StateVersion, &self.host.state_version)
            .set(Placeholder::UserName, &self.user.name)
            .set(Placeholder::UserDescription, &self.user.description)
            .set(Placeholder::Timezone, &self.locale.timezone)
            .set(Placeholder::DefaultLocale, &self.locale.default_locale)
            .set(Placeholder::LcAddress, &self.locale.lc_address)
            .set(Placeholder::LcIdentification, &self.locale.lc_identification)
            .set(Placeholder::LcMeasurement, &self.locale.lc_measurement)
            .set(Placeholder::LcMonetary, &self.locale.lc_monetary)
            .set(Placeholder::LcName, &self.locale.lc_name)
            .set(Placeholder::LcNumeric, &self.locale.lc_numeric)
            .set(Placeholder::LcPaper, &self.locale.lc_paper)
            .set(Placeholder::LcTelephone, &self.locale.lc_telephone)
            .set(Placeholder::LcTime, &self.locale.lc_time)
            .set(Placeholder::Keymap, &self.locale.keymap);
        subs
    }
}

/// Reject names that are empty or would escape the presets directory
pub fn validate_preset_name(name: &str) -> Result<(), PresetError> {
    if name.trim().is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(PresetError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// List presets stored in a directory, sorted by name
pub fn list_presets(dir: &Path) -> Result<Vec<PresetSummary>, PresetError> {
    let list_err = |e: std::io::Error| PresetError::List {
        path: dir.to_path_buf(),
        error: e.to_string(),
    };

    let mut presets = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        let is_preset = path.extension().and_then(|e| e.to_str()) == Some(PRESET_EXTENSION);
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() || !is_preset {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());
        presets.push(PresetSummary {
            name: name.to_string(),
            modified,
            path,
        });
    }

    presets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(presets)
}

/// Delete a stored preset
pub fn delete_preset(path: &Path) -> Result<(), PresetError> {
    if !path.exists() {
        return Err(PresetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    filesystem::remove_file(path).map_err(|e| PresetError::Delete {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
