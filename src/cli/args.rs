//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// multidomain - Per-domain environment, storage and cache resolution.
#[derive(Debug, Parser)]
#[command(name = "multidomain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Application base directory (overrides current directory)
    #[arg(short, long, global = true, env = "MULTIDOMAIN_BASE")]
    pub base: Option<PathBuf>,

    /// Directory holding .env files (overrides config/domain.yml)
    #[arg(long, global = true)]
    pub env_path: Option<PathBuf>,

    /// Storage root (overrides config/domain.yml)
    #[arg(long, global = true)]
    pub storage_path: Option<PathBuf>,

    /// Domain to resolve for, e.g. shop.example.com
    #[arg(long, global = true, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Hide headers and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the detected domain
    Detect(DetectArgs),

    /// Resolve env file, storage and cache paths for the domain (default)
    Resolve(ResolveArgs),

    /// List configured domains with their env file and storage path
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
