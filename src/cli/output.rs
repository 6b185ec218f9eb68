//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying spinners, status messages,
//! and JSON output. Quiet and JSON modes are set once at startup and
//! consulted by every printer.

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::OnceLock;

static GLOBAL: OnceLock<OutputConfig> = OnceLock::new();

/// Output preferences taken from the global flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Emit machine-readable JSON
    pub json: bool,
    /// Verbosity level from `-v`
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make this configuration the process-wide one.
    ///
    /// Only the first call has an effect.
    pub fn apply_global(self) {
        let _ = GLOBAL.set(self);
    }

    /// The process-wide configuration
    pub fn global() -> Self {
        GLOBAL.get().copied().unwrap_or_default()
    }

    /// Tracing level implied by the verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Whether human-readable text should be printed
    pub fn shows_text(&self) -> bool {
        !self.quiet && !self.json
    }
}

/// Create a spinner for operations with unknown duration
///
/// Hidden in quiet and JSON modes.
pub fn create_spinner(message: &str) -> ProgressBar {
    if !OutputConfig::global().shows_text() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a plain line
pub fn print_line(message: impl AsRef<str>) {
    if OutputConfig::global().shows_text() {
        println!("{}", message.as_ref());
    }
}

/// Print a success message
pub fn print_success(message: impl AsRef<str>) {
    if OutputConfig::global().shows_text() {
        println!("{} {}", status::SUCCESS, message.as_ref());
    }
}

/// Print an indented detail line under a previous message
pub fn print_detail(message: impl AsRef<str>) {
    if OutputConfig::global().shows_text() {
        println!("  {}", message.as_ref());
    }
}

/// Print an informational message
pub fn print_info(message: impl AsRef<str>) {
    if OutputConfig::global().shows_text() {
        println!("{} {}", status::INFO, message.as_ref());
    }
}

/// Print a warning to stderr
///
/// Warnings are shown in JSON mode too, since they never touch stdout.
pub fn print_warning(message: impl AsRef<str>) {
    if !OutputConfig::global().quiet {
        eprintln!("{} {}", status::WARNING, message.as_ref());
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    if OutputConfig::global().json {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        let value = serde_json::json!({ "error": error.to_string(), "causes": causes });
        eprintln!("{value}");
        return;
    }

    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
