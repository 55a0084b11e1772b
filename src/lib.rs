//! multidomain - Per-domain environment, storage and cache resolution.
//!
//! One application installation serves many tenant domains. multidomain
//! detects the current domain (from a `--domain` argument or the web
//! request), then picks the most specific `.env.<domain>` file, storage
//! directory and cache file names by walking the domain's labels from the
//! most specific suffix to the least.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Directory layout and `config/domain.yml` loading
//! - [`domain`] - Domain detection and per-domain resolution
//! - [`error`] - Error types and result aliases
//! - [`sys`] - Filesystem probing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use multidomain::config::ApplicationPaths;
//! use multidomain::domain::DomainResolver;
//!
//! let resolver = DomainResolver::new(ApplicationPaths::new("/srv/app"))
//!     .with_args(["artisan", "--domain=shop.example.com"]);
//!
//! assert_eq!(resolver.domain(), "shop.example.com");
//! assert_eq!(resolver.full_domain(), "shop.example.com");
//! ```
//!
//! For filesystem-backed resolution, see the integration tests.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod sys;
pub mod ui;

pub use error::{MultidomainError, Result};
