//! Detect command implementation.
//!
//! The `multidomain detect` command shows the detected full domain and its parts.

use crate::cli::args::DetectArgs;
use crate::domain::DomainResolver;
use crate::error::{MultidomainError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    resolver: DomainResolver,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(resolver: DomainResolver, args: DetectArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let state = self.resolver.domain_state();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(state).map_err(|e| MultidomainError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        if state.domain.is_empty() {
            ui.warning("No domain detected. Pass --domain=<host> to pick one.");
        }
        ui.field("full domain", &state.full_domain);
        ui.field("domain", &state.domain);
        ui.field("scheme", &state.scheme);
        ui.field("port", &state.port);

        Ok(CommandResult::success())
    }
}
