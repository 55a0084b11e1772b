//! `config/domain.yml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::paths::ApplicationPaths;
use crate::error::{MultidomainError, Result};

/// File name of the domain configuration inside the config directory.
pub const DOMAIN_CONFIG_FILE: &str = "domain.yml";

/// Tenant configuration.
///
/// ```yaml
/// domains:
///   - shop.example.com
///   - eu.example.com
/// storage_path: /var/lib/app/storage
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainConfig {
    /// Configured tenant domains.
    pub domains: Vec<String>,

    /// Directory holding the environment files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_path: Option<PathBuf>,

    /// Storage root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Bootstrap directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_path: Option<PathBuf>,
}

impl DomainConfig {
    /// Location of `domain.yml` for an application layout.
    pub fn path_for(paths: &ApplicationPaths) -> PathBuf {
        paths.config_dir().join(DOMAIN_CONFIG_FILE)
    }

    /// Parse YAML content. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty file is an empty config, not a parse error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MultidomainError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist.
    /// Returns `ConfigParseError` if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MultidomainError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MultidomainError::Io(e)
            }
        })?;
        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), domains = config.domains.len(), "Loaded domain config");
        Ok(config)
    }

    /// Load a config file, returning the default config if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(MultidomainError::ConfigNotFound { .. }) => {
                debug!(path = %path.display(), "No domain config, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply the configured directory overrides to a layout.
    pub fn apply_paths(&self, mut paths: ApplicationPaths) -> ApplicationPaths {
        if let Some(env_path) = &self.env_path {
            paths = paths.with_environment_path(env_path);
        }
        if let Some(storage_path) = &self.storage_path {
            paths = paths.with_storage_path(storage_path);
        }
        if let Some(bootstrap_path) = &self.bootstrap_path {
            paths = paths.with_bootstrap_path(bootstrap_path);
        }
        paths
    }
}
