//! The once-detected domain of a resolver.

use serde::Serialize;

use super::context::{
    ContextStore, DOMAIN_KEY, DOMAIN_PORT_KEY, DOMAIN_SCHEME_KEY, FULL_DOMAIN_KEY,
};
use super::detector::DomainDetector;
use super::request::RequestSource;

/// Detected domain values, computed once per resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainState {
    /// Full `scheme://host[:port]` string as detected.
    pub full_domain: String,
    /// Bare host used for label lookups.
    pub domain: String,
    /// Scheme, empty when unknown.
    pub scheme: String,
    /// Non-default port, empty when absent.
    pub port: String,
}

impl DomainState {
    /// Run detection and split the result.
    pub fn detect(
        detector: &DomainDetector,
        args: Option<&[String]>,
        request: &dyn RequestSource,
    ) -> Self {
        let full_domain = detector.detect(args, request);
        let parts = detector.split(&full_domain);
        Self {
            full_domain,
            domain: parts.host,
            scheme: parts.scheme,
            port: parts.port,
        }
    }

    /// Whether the host equals any of `candidates`.
    pub fn domain_is<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates.into_iter().any(|c| c.as_ref() == self.domain)
    }

    /// Whether the full domain equals any of `candidates`.
    pub fn full_domain_is<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates.into_iter().any(|c| c.as_ref() == self.full_domain)
    }

    /// Publish the values into an application context.
    pub fn publish(&self, store: &mut dyn ContextStore) {
        store.set(FULL_DOMAIN_KEY, self.full_domain.clone());
        store.set(DOMAIN_KEY, self.domain.clone());
        store.set(DOMAIN_SCHEME_KEY, self.scheme.clone());
        store.set(DOMAIN_PORT_KEY, self.port.clone());
    }
}
