//! Module fragments
//!
//! A module is a `.nix` file under `modules/<category>/` that starts with a
//! fixed four-line header:
//!
//! ```text
//! # NIXOS-LEGO-MODULE: <name>
//! # PURPOSE: <purpose>
//! # CATEGORY: <category>
//! # AUTHOR: <author>
//! ```
//!
//! Everything after the header is the body and is never interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::category::Category;
use crate::error::ModuleError;

/// Prefix of the first header line
pub const NAME_PREFIX: &str = "# NIXOS-LEGO-MODULE: ";

/// Prefix of the second header line
pub const PURPOSE_PREFIX: &str = "# PURPOSE: ";

/// Prefix of the third header line
pub const CATEGORY_PREFIX: &str = "# CATEGORY: ";

/// Prefix of the fourth header line
pub const AUTHOR_PREFIX: &str = "# AUTHOR: ";

/// Number of header lines
pub const HEADER_LINES: usize = 4;

/// Identity of a module: `category/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId {
    category: Category,
    name: String,
}

impl ModuleId {
    /// Build an identity from its parts, validating the name
    pub fn new(category: Category, name: &str) -> Result<Self, ModuleError> {
        validate_name(name).map_err(|reason| ModuleError::InvalidId {
            id: format!("{category}/{name}"),
            reason,
        })?;
        Ok(Self {
            category,
            name: name.to_string(),
        })
    }

    /// Category of the module
    pub fn category(&self) -> Category {
        self.category
    }

    /// Name of the module (file stem)
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err("name contains a path separator".to_string());
    }
    if name.contains("..") {
        return Err("name contains '..'".to_string());
    }
    Ok(())
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.name)
    }
}

impl FromStr for ModuleId {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, name) = s.split_once('/').ok_or_else(|| ModuleError::InvalidId {
            id: s.to_string(),
            reason: "expected 'category/name'".to_string(),
        })?;
        let category = category.parse::<Category>()?;
        Self::new(category, name)
    }
}

impl TryFrom<String> for ModuleId {
    type Error = ModuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.to_string()
    }
}

/// A module fragment split into header fields and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    /// Display name from the first header line
    pub name: String,
    /// Purpose from the second header line
    pub purpose: String,
    /// Raw third header line with its prefix stripped
    pub category: String,
    /// Raw fourth header line with its prefix stripped
    pub author: String,
    /// Everything after the header, trailing newlines and spaces removed
    pub body: String,
}

impl ModuleSource {
    /// Split fragment text into header and body.
    ///
    /// Only the line count is checked: a fragment with fewer than four lines
    /// yields `None`. Prefixes are stripped when present and the raw line is
    /// kept otherwise.
    pub fn parse(content: &str) -> Option<Self> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < HEADER_LINES {
            return None;
        }

        let strip = |line: &str, prefix: &str| line.strip_prefix(prefix).unwrap_or(line).to_string();
        let body = lines[HEADER_LINES..]
            .join("\n")
            .trim_end_matches(['\n', ' '])
            .to_string();

        Some(Self {
            name: strip(lines[0], NAME_PREFIX),
            purpose: strip(lines[1], PURPOSE_PREFIX),
            category: strip(lines[2], CATEGORY_PREFIX),
            author: strip(lines[3], AUTHOR_PREFIX),
            body,
        })
    }
}

/// Extract the declared purpose from fragment text.
///
/// Returns the first `# PURPOSE:` line anywhere in the text, or an empty string.
pub fn extract_purpose(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(PURPOSE_PREFIX))
        .map(|purpose| purpose.trim().to_string())
        .unwrap_or_default()
}

/// Render the header of a freshly scaffolded module
pub fn scaffold_content(name: &str, category: Category, purpose: &str, author: &str) -> String {
    format!(
        "{NAME_PREFIX}{name}\n{PURPOSE_PREFIX}{purpose}\n{CATEGORY_PREFIX}{category}\n{AUTHOR_PREFIX}{author}\n"
    )
}
