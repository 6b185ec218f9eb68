//! Default configuration values

/// Default NixOS state version for new presets
pub const DEFAULT_STATE_VERSION: &str = "24.05";

/// Default timezone for new presets
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Default system locale
pub const DEFAULT_LOCALE: &str = "en_US.UTF-8";

/// Default value for every per-category `LC_*` override
pub const DEFAULT_EXTRA_LOCALE: &str = "pt_BR.UTF-8";

/// Default console keymap
pub const DEFAULT_KEYMAP: &str = "br-abnt2";

/// Default user name when none is given
pub const DEFAULT_USER: &str = "user";

/// Default author written into scaffolded module headers
pub const DEFAULT_MODULE_AUTHOR: &str = "user";

/// Purpose line written into scaffolded module headers
pub const DEFAULT_MODULE_PURPOSE: &str = "<describe the purpose>";

/// Parameters every generated module wrapper declares, before any flake input aliases
pub const BASELINE_WRAPPER_ARGS: &[&str] = &["pkgs", "lib", "config", "pkgs-master"];

/// `chrono` format of the timestamp suffix used when a build has no label
pub const TIMESTAMP_LABEL_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
