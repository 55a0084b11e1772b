//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which builds the
//! [`DomainResolver`](crate::domain::DomainResolver) shared by every
//! subcommand and routes to the implementation.

pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod list;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
