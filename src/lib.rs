//! Legoflake - compose NixOS flakes from reusable module fragments
//!
//! A project holds categorized `.nix` module fragments, descriptor files for
//! extra flake inputs and dev shells, a base flake template, and presets that
//! describe one machine. Building a preset substitutes its values into the
//! template and injects the chosen modules, producing a standalone flake.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic
//! - [`infra`] - Infrastructure layer (filesystem, directories, git)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
