//! List command implementation.
//!
//! The `multidomain list` command resolves every domain configured in
//! `config/domain.yml`.

use crate::cli::args::ListArgs;
use crate::domain::DomainResolver;
use crate::error::{MultidomainError, Result};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    resolver: DomainResolver,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(resolver: DomainResolver, args: ListArgs) -> Self {
        Self { resolver, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let domains = self.resolver.domains_list();

        if self.args.json {
            let json = serde_json::to_string_pretty(&domains)
                .map_err(|e| MultidomainError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        if domains.is_empty() {
            ui.warning("No domains configured in config/domain.yml");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["DOMAIN", "ENV", "STORAGE"]);
        for (domain, entry) in &domains {
            table.add_row([
                domain.clone(),
                entry.env.clone(),
                entry.storage_path.display().to_string(),
            ]);
        }
        ui.raw(&table.render());

        Ok(CommandResult::success())
    }
}
