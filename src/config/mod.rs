//! Configuration for multidomain.
//!
//! - Directory layout in [`paths`]
//! - `config/domain.yml` loading in [`domain_config`]
//!
//! # Example
//!
//! ```
//! use multidomain::config::{ApplicationPaths, DomainConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let paths = ApplicationPaths::new(temp.path());
//! fs::create_dir_all(paths.config_dir()).unwrap();
//! fs::write(DomainConfig::path_for(&paths), "domains: [shop.example.com]").unwrap();
//!
//! let config = DomainConfig::load(&DomainConfig::path_for(&paths)).unwrap();
//! assert_eq!(config.domains, vec!["shop.example.com"]);
//! ```

pub mod domain_config;
pub mod paths;

pub use domain_config::{DomainConfig, DOMAIN_CONFIG_FILE};
pub use paths::ApplicationPaths;
