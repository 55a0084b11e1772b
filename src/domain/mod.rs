//! Domain detection and per-domain resolution.
//!
//! - [`detector`] - Full domain detection from CLI arguments or a request
//! - [`request`] - Request sources for web-side detection
//! - [`search`] - Hierarchical fallback search over domain labels
//! - [`state`] - The once-detected domain values
//! - [`context`] - Key-value sink the detected values are published into
//! - [`resolver`] - Environment file, storage and cache path resolution

pub mod context;
pub mod detector;
pub mod request;
pub mod resolver;
pub mod search;
pub mod state;

pub use context::ContextStore;
pub use detector::{DomainDetector, FullDomain, DOMAIN_OPTION};
pub use request::{CgiRequest, RequestSource, StaticRequest};
pub use resolver::{DomainEntry, DomainResolver, CONFIG_CACHE_ENV, ROUTES_CACHE_ENV};
pub use search::sanitize;
pub use state::DomainState;
