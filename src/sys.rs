//! Filesystem probing and path helpers.
//!
//! Domain resolution only ever asks whether something exists. The
//! [`Filesystem`] trait is that seam, so resolution can be exercised
//! against an in-memory layout or a probe counter in tests.

use std::path::{Path, PathBuf};

/// Existence checks used by the hierarchical searches.
pub trait Filesystem {
    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`Filesystem`] backed by `std::fs` metadata lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Strip trailing `/` and `\` from a path.
///
/// A path made only of separators (the filesystem root) is returned as-is.
pub fn trim_trailing_separators(path: PathBuf) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() || trimmed.len() == raw.len() {
        return path;
    }
    PathBuf::from(trimmed)
}
