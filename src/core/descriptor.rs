//! Flake input and dev shell descriptors
//!
//! Both descriptor files are optional JSON arrays under `modules/overlays/`.
//! A missing file means "no descriptors"; a file that exists but does not
//! parse aborts the build.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::defaults::BASELINE_WRAPPER_ARGS;
use crate::error::DescriptorError;

/// An external flake input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlakeInput {
    /// Input name in the flake's `inputs` set
    pub name: String,

    /// Flake reference, e.g. `github:owner/repo`
    pub url: String,

    /// Argument name under which the resolved value reaches module bodies
    pub arg: String,

    /// Attribute path resolved on the input, e.g. `packages.${system}.default`
    pub attr: String,

    /// Whether the input's own `nixpkgs` should follow the project's
    #[serde(default)]
    pub follows_nixpkgs: bool,
}

/// A development shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevShell {
    /// Shell name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Packages available in the shell, in order
    #[serde(default)]
    pub packages: Vec<String>,

    /// Initialization script embedded verbatim
    #[serde(default, rename = "shellHook")]
    pub shell_hook: String,
}

/// Load the flake input list; missing file yields an empty list
pub fn load_flake_inputs(path: &Path) -> Result<Vec<FlakeInput>, DescriptorError> {
    load_optional_array(path)
}

/// Load the dev shell list; missing file yields an empty list
pub fn load_dev_shells(path: &Path) -> Result<Vec<DevShell>, DescriptorError> {
    load_optional_array(path)
}

fn load_optional_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DescriptorError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No descriptor file at {}, using empty list", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DescriptorError::Read {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
    };

    serde_json::from_str(&content).map_err(|e| DescriptorError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Reject flake inputs whose argument names would clash in a module wrapper.
///
/// Generated wrappers declare the baseline arguments followed by every alias,
/// so an alias must be non-empty, distinct from the baseline, and unique.
pub fn validate_flake_inputs(inputs: &[FlakeInput]) -> Result<(), DescriptorError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for input in inputs {
        if input.arg.trim().is_empty() {
            return Err(DescriptorError::EmptyAlias {
                name: input.name.clone(),
            });
        }
        if BASELINE_WRAPPER_ARGS.contains(&input.arg.as_str()) {
            return Err(DescriptorError::ReservedAlias {
                alias: input.arg.clone(),
                name: input.name.clone(),
            });
        }
        if let Some(first) = seen.insert(input.arg.as_str(), input.name.as_str()) {
            return Err(DescriptorError::DuplicateAlias {
                alias: input.arg.clone(),
                first: first.to_string(),
                second: input.name.clone(),
            });
        }
    }
    Ok(())
}
