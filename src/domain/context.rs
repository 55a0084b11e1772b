//! Key-value sink for detected domain values.
//!
//! Once detection runs, the resolver publishes the detected values under
//! fixed keys so unrelated parts of the host application can read them.

use std::collections::{BTreeMap, HashMap};

/// Key holding the full `scheme://host[:port]` string.
pub const FULL_DOMAIN_KEY: &str = "full_domain";
/// Key holding the bare host.
pub const DOMAIN_KEY: &str = "domain";
/// Key holding the scheme.
pub const DOMAIN_SCHEME_KEY: &str = "domain_scheme";
/// Key holding the non-default port.
pub const DOMAIN_PORT_KEY: &str = "domain_port";

/// Application context store.
pub trait ContextStore {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;
}

impl ContextStore for BTreeMap<String, String> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl ContextStore for HashMap<String, String> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}
