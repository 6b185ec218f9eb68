//! Project layout
//!
//! Maps the fixed project structure onto paths under a root directory and
//! discovers that root from the environment.

use std::path::{Path, PathBuf};

use crate::config::paths::{
    BASE_TEMPLATE_FILE, DESCRIPTOR_DIR, DEVSHELLS_FILE, ENV_ROOT, FLAKES_DIR, FLAKE_INPUTS_FILE,
    MODULES_DIR, NIX_EXTENSION, PRESETS_DIR, PRESET_EXTENSION, ROOT_FLAKE_FILE, TEMPLATES_DIR,
};
use crate::core::category::Category;
use crate::core::module::ModuleId;

/// Paths of a legoflake project rooted at one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `modules/`
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }

    /// `modules/<category>/`
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.modules_dir().join(category.as_str())
    }

    /// `modules/<category>/<name>.nix`
    pub fn module_path(&self, id: &ModuleId) -> PathBuf {
        self.category_dir(id.category())
            .join(format!("{}.{NIX_EXTENSION}", id.name()))
    }

    /// `modules/overlays/flake-inputs.json`
    pub fn flake_inputs_path(&self) -> PathBuf {
        self.modules_dir().join(DESCRIPTOR_DIR).join(FLAKE_INPUTS_FILE)
    }

    /// `modules/overlays/devshells.json`
    pub fn devshells_path(&self) -> PathBuf {
        self.modules_dir().join(DESCRIPTOR_DIR).join(DEVSHELLS_FILE)
    }

    /// `templates/`
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// `templates/base-flake.nix`
    pub fn template_path(&self) -> PathBuf {
        self.templates_dir().join(BASE_TEMPLATE_FILE)
    }

    /// `presets/`
    pub fn presets_dir(&self) -> PathBuf {
        self.root.join(PRESETS_DIR)
    }

    /// `presets/<name>.toml`
    pub fn preset_path(&self, name: &str) -> PathBuf {
        self.presets_dir()
            .join(format!("{name}.{PRESET_EXTENSION}"))
    }

    /// `flakes/`
    pub fn flakes_dir(&self) -> PathBuf {
        self.root.join(FLAKES_DIR)
    }

    /// `flake.nix` at the root
    pub fn root_flake_path(&self) -> PathBuf {
        self.root.join(ROOT_FLAKE_FILE)
    }
}

/// Resolve the project root.
///
/// Order: explicit path, `LEGOFLAKE_ROOT`, configured root, the nearest
/// ancestor of `cwd` containing `presets/`, then `cwd` itself.
pub fn discover_root(explicit: Option<&Path>, configured: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(ENV_ROOT) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    if let Some(path) = configured {
        return path.to_path_buf();
    }
    find_marked_ancestor(cwd).unwrap_or_else(|| cwd.to_path_buf())
}

/// First ancestor of `start` (inclusive) that contains a `presets/` directory
pub fn find_marked_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PRESETS_DIR).is_dir())
        .map(Path::to_path_buf)
}
