//! Resolve command implementation.
//!
//! The `multidomain resolve` command shows which environment file, storage
//! directory and cache files apply to the detected domain.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::domain::DomainResolver;
use crate::error::{MultidomainError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Everything resolved for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Detected host.
    pub domain: String,
    /// Detected `scheme://host[:port]`.
    pub full_domain: String,
    /// Selected environment file name.
    pub environment_file: String,
    /// Full path of the selected environment file.
    pub environment_file_path: PathBuf,
    /// Most specific existing storage directory.
    pub storage_path: PathBuf,
    /// Storage directory named after the exact domain.
    pub exact_storage_path: PathBuf,
    /// Config cache file.
    pub cached_config_path: PathBuf,
    /// Routes cache file.
    pub cached_routes_path: PathBuf,
}

impl ResolveReport {
    /// Collect the report from a resolver.
    pub fn collect(resolver: &DomainResolver) -> Self {
        Self {
            domain: resolver.domain().to_string(),
            full_domain: resolver.full_domain().to_string(),
            environment_file: resolver.environment_file(),
            environment_file_path: resolver.environment_file_path(),
            storage_path: resolver.storage_path(None),
            exact_storage_path: resolver.exact_domain_storage_path(None),
            cached_config_path: resolver.cached_config_path(),
            cached_routes_path: resolver.cached_routes_path(),
        }
    }
}

/// The resolve command implementation.
pub struct ResolveCommand {
    resolver: DomainResolver,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(resolver: DomainResolver, args: ResolveArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = ResolveReport::collect(&self.resolver);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| MultidomainError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        if report.domain.is_empty() {
            ui.warning("No domain detected; showing shared defaults.");
        } else {
            ui.show_header(&report.full_domain);
        }
        ui.field("domain", &report.domain);
        ui.field("env file", &report.environment_file);
        ui.field("env file path", &report.environment_file_path.display().to_string());
        ui.field("storage path", &report.storage_path.display().to_string());
        ui.field(
            "exact storage path",
            &report.exact_storage_path.display().to_string(),
        );
        ui.field(
            "config cache",
            &report.cached_config_path.display().to_string(),
        );
        ui.field(
            "routes cache",
            &report.cached_routes_path.display().to_string(),
        );

        Ok(CommandResult::success())
    }
}
