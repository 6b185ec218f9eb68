//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod flakes;
pub mod init;
pub mod module;
pub mod preset;
pub mod stage;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use std::path::Path;

use crate::cli::output::OutputConfig;
use crate::core::category::{Category, CategoryRegistry};
use crate::core::global_config::GlobalConfig;
use crate::core::module::ModuleId;
use crate::infra::dirs::LegoDirs;
use crate::infra::layout::{discover_root, ProjectLayout};

/// Everything a command needs to know about where and how to run
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved project layout
    pub layout: ProjectLayout,
    /// Known module categories
    pub registry: CategoryRegistry,
    /// Global configuration
    pub config: GlobalConfig,
    /// Output preferences
    pub output: OutputConfig,
}

impl Context {
    /// Load the global configuration and resolve the project root
    pub fn load(explicit_root: Option<&Path>) -> Result<Self> {
        let dirs = LegoDirs::new();
        let config = GlobalConfig::load(&dirs).context("Failed to load global configuration")?;
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let root = discover_root(explicit_root, config.project.root.as_deref(), &cwd);
        tracing::debug!("Using project root {}", root.display());

        Ok(Self {
            layout: ProjectLayout::new(root),
            registry: CategoryRegistry::standard(),
            config,
            output: OutputConfig::global(),
        })
    }

    /// Context for an explicit root and configuration
    pub fn with_layout(layout: ProjectLayout, config: GlobalConfig) -> Self {
        Self {
            layout,
            registry: CategoryRegistry::standard(),
            config,
            output: OutputConfig::global(),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project layout and a starter template
    Init,

    /// Module management subcommands
    Module {
        #[command(subcommand)]
        command: ModuleCommands,
    },

    /// Preset management subcommands
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Generate a flake for a preset
    Build {
        /// Preset name
        preset: String,

        /// Modules to include as category/name, in order (defaults to the
        /// preset's active modules)
        modules: Vec<ModuleId>,

        /// Artifact label (defaults to the build time)
        #[arg(short, long)]
        label: Option<String>,

        /// Copy the result to flake.nix and stage it with git
        #[arg(long, conflicts_with = "no_stage")]
        stage: bool,

        /// Do not stage, even if the global config asks for it
        #[arg(long)]
        no_stage: bool,
    },

    /// List generated flakes, newest first
    Flakes,

    /// Copy a generated flake to flake.nix and stage it with git
    Stage {
        /// Artifact file name under flakes/, or a path
        artifact: String,
    },

    /// Validate the project without building
    Check,
}

/// Module subcommands
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    /// List modules
    List {
        /// Only list this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Create a new module containing only the header
    New {
        /// Category
        category: Category,

        /// Module name (file stem)
        name: String,

        /// One-line purpose
        #[arg(short, long)]
        purpose: Option<String>,

        /// Author
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Show a module's header
    Show {
        /// Module as category/name
        id: ModuleId,
    },

    /// Delete a module
    Delete {
        /// Module as category/name
        id: ModuleId,
    },
}

/// Preset subcommands
#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List presets
    List,

    /// Create a preset with default values
    New {
        /// Preset name
        name: String,

        /// Primary user name
        #[arg(short, long)]
        user: Option<String>,

        /// Replace an existing preset
        #[arg(short, long)]
        force: bool,
    },

    /// Show a preset
    Show {
        /// Preset name
        name: String,
    },

    /// Set one field of a preset
    Set {
        /// Preset name
        name: String,

        /// Field name (e.g. host_name, timezone, lc_time, keymap)
        field: String,

        /// New value
        value: String,
    },

    /// Delete a preset
    Delete {
        /// Preset name
        name: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Init => init::execute(ctx).await,
            Self::Module { command } => match command {
                ModuleCommands::List { category } => module::execute_list(ctx, category).await,
                ModuleCommands::New {
                    category,
                    name,
                    purpose,
                    author,
                } => module::execute_new(ctx, category, &name, purpose, author).await,
                ModuleCommands::Show { id } => module::execute_show(ctx, &id).await,
                ModuleCommands::Delete { id } => module::execute_delete(ctx, &id).await,
            },
            Self::Preset { command } => match command {
                PresetCommands::List => preset::execute_list(ctx).await,
                PresetCommands::New { name, user, force } => {
                    preset::execute_new(ctx, &name, user, force).await
                }
                PresetCommands::Show { name } => preset::execute_show(ctx, &name).await,
                PresetCommands::Set { name, field, value } => {
                    preset::execute_set(ctx, &name, &field, &value).await
                }
                PresetCommands::Delete { name } => preset::execute_delete(ctx, &name).await,
            },
            Self::Build {
                preset,
                modules,
                label,
                stage,
                no_stage,
            } => {
                let options = build::BuildOptions {
                    preset,
                    modules,
                    label: label.unwrap_or_default(),
                    stage: if no_stage {
                        false
                    } else {
                        stage || ctx.config.stage_by_default()
                    },
                };
                build::execute(ctx, options).await
            }
            Self::Flakes => flakes::execute(ctx).await,
            Self::Stage { artifact } => stage::execute(ctx, &artifact).await,
            Self::Check => check::execute(ctx).await,
        }
    }
}
