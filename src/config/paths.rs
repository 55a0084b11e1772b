//! Application directory layout.

use std::path::{Path, PathBuf};

use crate::sys::trim_trailing_separators;

/// Directories the resolver works against.
///
/// Defaults follow the usual application layout:
///
/// - environment files in the base directory
/// - storage in `<base>/storage`
/// - bootstrap (cache files) in `<base>/bootstrap`
///
/// # Example
///
/// ```
/// use multidomain::config::ApplicationPaths;
/// use std::path::Path;
///
/// let paths = ApplicationPaths::new("/srv/app/").with_environment_path("/etc/app/");
/// assert_eq!(paths.environment(), Path::new("/etc/app"));
/// assert_eq!(paths.storage(), Path::new("/srv/app/storage"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPaths {
    base: PathBuf,
    environment: PathBuf,
    storage: PathBuf,
    bootstrap: PathBuf,
}

impl ApplicationPaths {
    /// Layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = trim_trailing_separators(base.into());
        Self {
            environment: base.clone(),
            storage: base.join("storage"),
            bootstrap: base.join("bootstrap"),
            base,
        }
    }

    /// Use a different directory for environment files.
    pub fn with_environment_path(mut self, path: impl AsRef<Path>) -> Self {
        self.environment = self.absolutize(path.as_ref());
        self
    }

    /// Use a different storage root.
    pub fn with_storage_path(mut self, path: impl AsRef<Path>) -> Self {
        self.storage = self.absolutize(path.as_ref());
        self
    }

    /// Use a different bootstrap directory.
    pub fn with_bootstrap_path(mut self, path: impl AsRef<Path>) -> Self {
        self.bootstrap = self.absolutize(path.as_ref());
        self
    }

    /// Application base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory holding `.env` and `.env.<domain>` files.
    pub fn environment(&self) -> &Path {
        &self.environment
    }

    /// Shared storage root; per-domain directories live under it.
    pub fn storage(&self) -> &Path {
        &self.storage
    }

    /// Bootstrap directory; cache files live in its `cache` subdirectory.
    pub fn bootstrap(&self) -> &Path {
        &self.bootstrap
    }

    /// Directory holding `domain.yml`.
    pub fn config_dir(&self) -> PathBuf {
        self.base.join("config")
    }

    // Relative paths are taken from the base directory.
    fn absolutize(&self, path: &Path) -> PathBuf {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        };
        trim_trailing_separators(path)
    }
}
