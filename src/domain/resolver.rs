//! Per-domain resolution of environment files, storage and cache paths.
//!
//! [`DomainResolver`] detects the current domain lazily, once, and answers
//! every domain-dependent question from that detection:
//!
//! 1. Environment file: most specific `.env.<suffix>`, else `.env`
//! 2. Storage path: most specific `<storage>/<sanitized suffix>`, else `<storage>`
//! 3. Cache files: `<bootstrap>/cache/<type><suffix>` keyed on the env file
//!
//! Detection is memoized for the lifetime of the resolver. Use one
//! resolver per request, or call [`DomainResolver::reset`] between
//! requests in a long-lived worker.

use std::cell::{OnceCell, Ref, RefCell};
use std::collections::BTreeMap;
use std::env::VarError;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::context::ContextStore;
use super::detector::DomainDetector;
use super::request::{RequestSource, StaticRequest};
use super::search;
use super::state::DomainState;
use crate::config::{ApplicationPaths, DomainConfig};
use crate::sys::{Filesystem, LocalFilesystem};

/// Environment variable overriding the config cache path.
pub const CONFIG_CACHE_ENV: &str = "APP_CONFIG_CACHE";

/// Environment variable overriding the routes cache path.
pub const ROUTES_CACHE_ENV: &str = "APP_ROUTES_CACHE";

type EnvLookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

fn process_env(key: &str) -> Result<String, VarError> {
    std::env::var(key)
}

/// Resolved locations of one configured domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEntry {
    /// Most specific existing storage directory.
    pub storage_path: PathBuf,
    /// Most specific existing environment file name.
    pub env: String,
}

/// Resolves domain-dependent files and directories.
///
/// # Example
///
/// ```
/// use multidomain::config::ApplicationPaths;
/// use multidomain::domain::{DomainResolver, StaticRequest};
/// use tempfile::TempDir;
/// use std::fs;
///
/// let temp = TempDir::new().unwrap();
/// fs::write(temp.path().join(".env.example.com"), "APP_NAME=shop").unwrap();
/// fs::create_dir_all(temp.path().join("storage/example_com")).unwrap();
///
/// let resolver = DomainResolver::new(ApplicationPaths::new(temp.path()))
///     .with_request(StaticRequest::new("shop.example.com"));
///
/// assert_eq!(resolver.domain(), "shop.example.com");
/// assert_eq!(resolver.environment_file(), ".env.example.com");
/// assert!(resolver.storage_path(None).ends_with("example_com"));
/// ```
pub struct DomainResolver<C = BTreeMap<String, String>> {
    paths: ApplicationPaths,
    detector: DomainDetector,
    args: Option<Vec<String>>,
    request: Box<dyn RequestSource>,
    filesystem: Box<dyn Filesystem>,
    env_lookup: EnvLookup,
    domains: Vec<String>,
    pinned_environment_file: Option<String>,
    pinned_storage_path: Option<PathBuf>,
    state: OnceCell<DomainState>,
    domain_storage_path: RefCell<Option<PathBuf>>,
    context: RefCell<C>,
}

impl DomainResolver<BTreeMap<String, String>> {
    /// Create a resolver publishing into a fresh in-memory context.
    pub fn new(paths: ApplicationPaths) -> Self {
        Self::with_context(paths, BTreeMap::new())
    }
}

impl<C: ContextStore> DomainResolver<C> {
    /// Create a resolver publishing detected values into `context`.
    ///
    /// Defaults: no CLI arguments, an empty request, the local filesystem
    /// and the process environment for cache path overrides.
    pub fn with_context(paths: ApplicationPaths, context: C) -> Self {
        Self {
            paths,
            detector: DomainDetector::new(),
            args: None,
            request: Box::new(StaticRequest::empty()),
            filesystem: Box::new(LocalFilesystem),
            env_lookup: Box::new(process_env),
            domains: Vec::new(),
            pinned_environment_file: None,
            pinned_storage_path: None,
            state: OnceCell::new(),
            domain_storage_path: RefCell::new(None),
            context: RefCell::new(context),
        }
    }

    /// Detect from command-line arguments (the console path).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Detect from a request (the web path, used when no arguments are set).
    pub fn with_request(mut self, request: impl RequestSource + 'static) -> Self {
        self.request = Box::new(request);
        self
    }

    /// Probe through a custom filesystem.
    pub fn with_filesystem(mut self, filesystem: impl Filesystem + 'static) -> Self {
        self.filesystem = Box::new(filesystem);
        self
    }

    /// Read cache path overrides through a custom lookup (for testing).
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError> + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Set the configured tenant domains.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Take the configured domains from a loaded config.
    pub fn with_config(self, config: &DomainConfig) -> Self {
        self.with_domains(config.domains.iter().cloned())
    }

    /// Always use this environment file, skipping the search.
    ///
    /// An empty name leaves the search in place.
    pub fn with_environment_file(mut self, file: impl Into<String>) -> Self {
        let file = file.into();
        self.pinned_environment_file = (!file.is_empty()).then_some(file);
        self
    }

    /// Always use this storage path, skipping the search.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pinned_storage_path = Some(path.into());
        self
    }

    /// Directory layout in use.
    pub fn paths(&self) -> &ApplicationPaths {
        &self.paths
    }

    /// Configured tenant domains.
    pub fn configured_domains(&self) -> &[String] {
        &self.domains
    }

    /// Detected state, running detection on first use.
    pub fn domain_state(&self) -> &DomainState {
        self.state.get_or_init(|| self.run_detection())
    }

    /// Whether detection has run.
    pub fn is_detected(&self) -> bool {
        self.state.get().is_some()
    }

    /// Discard the detected domain and the storage path memo.
    pub fn reset(&mut self) {
        self.state.take();
        self.domain_storage_path.replace(None);
    }

    /// Run detection again, replacing the previous result.
    pub fn detect_domain(&mut self) -> &DomainState {
        self.reset();
        self.domain_state()
    }

    /// The application context, populated with the detected values.
    pub fn context(&self) -> Ref<'_, C> {
        self.domain_state();
        self.context.borrow()
    }

    /// Consume the resolver, returning its context.
    pub fn into_context(self) -> C {
        self.context.into_inner()
    }

    /// Current host, e.g. `shop.example.com`. Empty when undetectable.
    pub fn domain(&self) -> &str {
        &self.domain_state().domain
    }

    /// Whether the current host is one of `candidates`.
    pub fn domain_is<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.domain_state().domain_is(candidates)
    }

    /// Current `scheme://host[:port]`.
    pub fn full_domain(&self) -> &str {
        &self.domain_state().full_domain
    }

    /// Whether the current full domain is one of `candidates`.
    pub fn full_domain_is<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.domain_state().full_domain_is(candidates)
    }

    /// Current scheme.
    pub fn scheme(&self) -> &str {
        &self.domain_state().scheme
    }

    /// Current non-default port.
    pub fn port(&self) -> &str {
        &self.domain_state().port
    }

    /// Environment file in use: the pinned one, else the search result.
    pub fn environment_file(&self) -> String {
        match &self.pinned_environment_file {
            Some(file) => file.clone(),
            None => self.environment_file_domain(None),
        }
    }

    /// Full path of [`environment_file`](Self::environment_file).
    pub fn environment_file_path(&self) -> PathBuf {
        self.paths.environment().join(self.environment_file())
    }

    /// Most specific environment file for `domain` (default: current).
    pub fn environment_file_domain(&self, domain: Option<&str>) -> String {
        let domain = self.domain_or_current(domain);
        let file = search::search_env_file(self.filesystem.as_ref(), self.paths.environment(), domain);
        debug!(domain, file = %file, fallback = (file == search::DEFAULT_ENV_FILE), "Resolved environment file");
        file
    }

    /// Most specific storage directory for `domain` (default: current).
    ///
    /// The result is remembered and reused by [`storage_path`](Self::storage_path).
    pub fn domain_storage_path(&self, domain: Option<&str>) -> PathBuf {
        let path = self.search_storage_path(domain);
        self.domain_storage_path.replace(Some(path.clone()));
        path
    }

    /// Storage directory for `domain` whether or not it exists yet.
    pub fn exact_domain_storage_path(&self, domain: Option<&str>) -> PathBuf {
        search::storage_dir_for(self.paths.storage(), self.domain_or_current(domain))
    }

    /// Storage path in use: pinned, else remembered, else searched.
    pub fn storage_path(&self, domain: Option<&str>) -> PathBuf {
        if let Some(path) = &self.pinned_storage_path {
            return path.clone();
        }
        if let Some(path) = self.domain_storage_path.borrow().as_ref() {
            return path.clone();
        }
        self.domain_storage_path(domain)
    }

    /// Path of the config cache file.
    pub fn cached_config_path(&self) -> PathBuf {
        self.cached_path(CONFIG_CACHE_ENV, "config")
    }

    /// Path of the routes cache file.
    pub fn cached_routes_path(&self) -> PathBuf {
        self.cached_path(ROUTES_CACHE_ENV, "routes")
    }

    /// Cache file suffix for the environment file in use.
    pub fn domain_cached_file_suffix(&self) -> String {
        search::cached_file_suffix(&self.environment_file())
    }

    /// Storage path and environment file of every configured domain.
    ///
    /// Does not touch the remembered storage path of the current domain.
    pub fn domains_list(&self) -> BTreeMap<String, DomainEntry> {
        self.domains
            .iter()
            .map(|domain| {
                let entry = DomainEntry {
                    storage_path: self.search_storage_path(Some(domain)),
                    env: self.environment_file_domain(Some(domain)),
                };
                (domain.clone(), entry)
            })
            .collect()
    }

    fn run_detection(&self) -> DomainState {
        let state = DomainState::detect(&self.detector, self.args.as_deref(), self.request.as_ref());
        debug!(
            domain = %state.domain,
            scheme = %state.scheme,
            port = %state.port,
            "Domain state initialized"
        );
        state.publish(&mut *self.context.borrow_mut());
        state
    }

    fn domain_or_current<'a>(&'a self, domain: Option<&'a str>) -> &'a str {
        match domain {
            Some(domain) => domain,
            None => self.domain(),
        }
    }

    fn search_storage_path(&self, domain: Option<&str>) -> PathBuf {
        let domain = self.domain_or_current(domain);
        let path = search::search_storage_path(self.filesystem.as_ref(), self.paths.storage(), domain);
        debug!(domain, path = %path.display(), "Resolved storage path");
        path
    }

    fn cached_path(&self, override_var: &str, kind: &str) -> PathBuf {
        if let Some(path) = (self.env_lookup)(override_var).ok().filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        self.paths
            .bootstrap()
            .join("cache")
            .join(format!("{}{}", kind, self.domain_cached_file_suffix()))
    }
}
