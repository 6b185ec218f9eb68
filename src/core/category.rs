//! Module categories
//!
//! Every module lives in exactly one category directory. The set of categories
//! is fixed; [`CategoryRegistry`] pairs each with its description and is built
//! once by the caller and handed to the catalog by reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModuleError;

/// A module category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base NixOS configuration and bootloader
    System,
    /// Drivers, kernel and hardware tuning
    Hardware,
    /// User programs and terminals
    Apps,
    /// Daemons, databases and servers
    Services,
    /// Nixpkgs overlays and patches
    Overlays,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::System,
        Category::Hardware,
        Category::Apps,
        Category::Services,
        Category::Overlays,
    ];

    /// Directory name of the category under `modules/`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Hardware => "hardware",
            Self::Apps => "apps",
            Self::Services => "services",
            Self::Overlays => "overlays",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModuleError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

/// Immutable table of categories and their descriptions
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: Vec<(Category, &'static str)>,
}

impl CategoryRegistry {
    /// The standard registry with every category
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (Category::System, "Base NixOS configuration and bootloader"),
                (Category::Hardware, "Drivers, kernel and hardware tuning"),
                (Category::Apps, "User programs and terminals"),
                (Category::Services, "Docker, databases, servers and daemons"),
                (Category::Overlays, "Nixpkgs overlays and patches"),
            ],
        }
    }

    /// A registry restricted to a single category of the standard set
    pub fn only(category: Category) -> Self {
        let mut registry = Self::standard();
        registry.entries.retain(|(c, _)| *c == category);
        registry
    }

    /// Categories in registry order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Description of a category, if registered
    pub fn description(&self, category: Category) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, d)| *d)
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
