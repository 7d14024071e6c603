//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Componentry - install registry components into your project
#[derive(Parser, Debug)]
#[command(name = "componentry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON document per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install entries and everything they depend on
    Install {
        /// Registry entry names
        #[arg(required = true)]
        names: Vec<String>,

        /// Project directory (default: current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Registry URL or directory, overrides components.toml
        #[arg(long)]
        registry: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Replace files that differ from the registry rendering
        #[arg(long)]
        overwrite: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Compare installed entries with the registry
    Diff {
        /// Entry to compare (default: every installed entry)
        name: Option<String>,

        /// Project directory (default: current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Registry URL or directory, overrides components.toml
        #[arg(long)]
        registry: Option<String>,
    },
}

impl Commands {
    pub fn cwd(&self) -> Option<&PathBuf> {
        match self {
            Commands::Install { cwd, .. } | Commands::Diff { cwd, .. } => cwd.as_ref(),
        }
    }

    pub fn registry(&self) -> Option<&str> {
        match self {
            Commands::Install { registry, .. } | Commands::Diff { registry, .. } => {
                registry.as_deref()
            }
        }
    }
}
