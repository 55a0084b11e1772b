//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::config::{ApplicationPaths, DomainConfig};
use crate::domain::{CgiRequest, DomainResolver};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    base: PathBuf,
    args: Vec<String>,
    web_request: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the application at `base`.
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            args: Vec::new(),
            web_request: false,
        }
    }

    /// Raw process arguments, scanned for `--domain`.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Detect from CGI server variables instead of the arguments.
    pub fn with_web_request(mut self, web_request: bool) -> Self {
        self.web_request = web_request;
        self
    }

    /// Get the application base path.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Build the resolver for this invocation.
    ///
    /// Layout precedence: command-line flags, then `config/domain.yml`,
    /// then the default layout under the base path.
    pub fn resolver(&self, cli: &Cli) -> Result<DomainResolver> {
        let defaults = ApplicationPaths::new(&self.base);
        let config = DomainConfig::load_optional(&DomainConfig::path_for(&defaults))?;

        let mut paths = config.apply_paths(defaults);
        if let Some(env_path) = &cli.env_path {
            paths = paths.with_environment_path(env_path);
        }
        if let Some(storage_path) = &cli.storage_path {
            paths = paths.with_storage_path(storage_path);
        }
        debug!(?paths, web_request = self.web_request, "Building resolver");

        let resolver = DomainResolver::new(paths).with_config(&config);
        Ok(if self.web_request {
            resolver.with_request(CgiRequest::from_env())
        } else {
            resolver.with_args(self.args.iter().cloned())
        })
    }

    /// Dispatch a command and report any error through `ui`.
    ///
    /// Returns the process exit code.
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> u8 {
        match self.dispatch(cli, ui) {
            Ok(result) => u8::try_from(result.exit_code).unwrap_or(1),
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                1
            }
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `resolve`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Detect(args)) => {
                let cmd = super::detect::DetectCommand::new(self.resolver(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(self.resolver(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.resolver(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::resolve::ResolveCommand::new(
                    self.resolver(cli)?,
                    ResolveArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
