//! Configuration and constants
//!
//! - [`defaults`] - Default values for presets and generated code
//! - [`paths`] - Fixed locations inside a project root

pub mod defaults;
pub mod paths;
