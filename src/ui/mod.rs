//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for aligned tabular output
//!
//! # Example
//!
//! ```
//! use multidomain::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.field("domain", "shop.example.com");
//! assert!(ui.has_field("domain", "shop.example.com"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a labelled value, e.g. `env file: .env.example.com`.
    fn field(&mut self, key: &str, value: &str);

    /// Write machine-readable output (JSON, YAML). Shown in every mode.
    fn raw(&mut self, content: &str);
}
