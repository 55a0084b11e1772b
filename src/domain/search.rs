//! Hierarchical fallback search over domain labels.
//!
//! A domain such as `shop.eu.example.com` is tried from its most specific
//! form down to its last label: `shop.eu.example.com`, `eu.example.com`,
//! `example.com`, `com`. The first candidate that exists wins; when none
//! does, the caller's default applies. The search never fails.

use std::path::{Path, PathBuf};

use crate::sys::{trim_trailing_separators, Filesystem};

/// The shared environment file used when no domain-specific one exists.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Prefix of domain-specific environment files.
pub const ENV_FILE_PREFIX: &str = ".env.";

/// Extension of config and route cache files.
pub const CACHE_FILE_EXTENSION: &str = ".php";

/// Split a domain into its non-empty labels, in order.
///
/// ```
/// use multidomain::domain::search::labels;
///
/// assert_eq!(labels("shop.example.com"), vec!["shop", "example", "com"]);
/// assert!(labels("   ").is_empty());
/// ```
pub fn labels(domain: &str) -> Vec<&str> {
    domain
        .trim()
        .split('.')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect()
}

/// Candidate suffixes for a domain, most specific first.
///
/// The default is not included; it is implied after the last entry.
pub fn candidates(domain: &str) -> Vec<String> {
    let labels = labels(domain);
    (0..labels.len()).map(|i| labels[i..].join(".")).collect()
}

/// Make a domain usable as a single path segment.
///
/// Dots become underscores so nested-key notations never see them as
/// separators. Path separators are replaced too, which keeps the segment
/// inside its parent directory.
pub fn sanitize(domain: &str) -> String {
    domain.replace(['.', '/', '\\'], "_")
}

/// Return the first built candidate that exists, most specific first.
///
/// Performs at most one probe per label.
pub fn search<T, B, E>(domain: &str, build: B, exists: E) -> Option<T>
where
    B: Fn(&str) -> T,
    E: Fn(&T) -> bool,
{
    candidates(domain)
        .iter()
        .map(|candidate| build(candidate))
        .find(|built| exists(built))
}

/// Environment file name for a candidate suffix.
pub fn env_file_name(candidate: &str) -> String {
    format!("{}{}", ENV_FILE_PREFIX, candidate)
}

/// Find the most specific `.env.<suffix>` file in `env_dir`, else `.env`.
pub fn search_env_file(fs: &dyn Filesystem, env_dir: &Path, domain: &str) -> String {
    search(domain, env_file_name, |file: &String| {
        !file.contains(['/', '\\']) && fs.is_file(&env_dir.join(file))
    })
    .unwrap_or_else(|| DEFAULT_ENV_FILE.to_string())
}

/// Storage directory for a candidate suffix, whether or not it exists.
///
/// The domain is reduced to its labels first, the same form the search
/// probes, so `shop.example.com.` and `shop.example.com` share a directory.
pub fn storage_dir_for(storage_root: &Path, domain: &str) -> PathBuf {
    let normalized = labels(domain).join(".");
    trim_trailing_separators(storage_root.join(sanitize(&normalized)))
}

/// Find the most specific existing storage directory, else the root itself.
pub fn search_storage_path(fs: &dyn Filesystem, storage_root: &Path, domain: &str) -> PathBuf {
    search(
        domain,
        |candidate| storage_dir_for(storage_root, candidate),
        |dir: &PathBuf| fs.is_dir(dir),
    )
    .unwrap_or_else(|| trim_trailing_separators(storage_root.to_path_buf()))
}

/// Cache file suffix derived from the selected environment file.
///
/// `.env` gives `.php`; `.env.shop.example.com` gives `-shop_example_com.php`.
pub fn cached_file_suffix(env_file: &str) -> String {
    if env_file == DEFAULT_ENV_FILE {
        return CACHE_FILE_EXTENSION.to_string();
    }
    let domain_part = env_file.strip_prefix(ENV_FILE_PREFIX).unwrap_or(env_file);
    format!("-{}{}", sanitize(domain_part), CACHE_FILE_EXTENSION)
}
