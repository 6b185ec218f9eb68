//! Fixed locations inside a legoflake project

/// Directory holding one subdirectory per module category
pub const MODULES_DIR: &str = "modules";

/// Category directory that also holds the descriptor files
pub const DESCRIPTOR_DIR: &str = "overlays";

/// Flake input descriptor file name
pub const FLAKE_INPUTS_FILE: &str = "flake-inputs.json";

/// Dev shell descriptor file name
pub const DEVSHELLS_FILE: &str = "devshells.json";

/// Template directory
pub const TEMPLATES_DIR: &str = "templates";

/// Base template file name
pub const BASE_TEMPLATE_FILE: &str = "base-flake.nix";

/// Preset directory
pub const PRESETS_DIR: &str = "presets";

/// Preset file extension
pub const PRESET_EXTENSION: &str = "toml";

/// Generated flake directory
pub const FLAKES_DIR: &str = "flakes";

/// Extension of module fragments and generated flakes
pub const NIX_EXTENSION: &str = "nix";

/// File the apply tool reads by convention
pub const ROOT_FLAKE_FILE: &str = "flake.nix";

/// Environment variable overriding project root discovery
pub const ENV_ROOT: &str = "LEGOFLAKE_ROOT";
