//! Ambient request sources for web-side domain detection.
//!
//! When no CLI arguments are available, the detector asks a
//! [`RequestSource`] for the scheme, host and port of the current request.

use std::env::VarError;

/// Scheme, host and port of the request being served.
///
/// All values are raw: the detector trims, lowercases and validates them.
pub trait RequestSource {
    /// Request scheme, e.g. `https`.
    fn scheme(&self) -> Option<String>;

    /// Host header value. May carry its own `:port`.
    fn host(&self) -> Option<String>;

    /// Server port, used when the host carries none.
    fn port(&self) -> Option<String>;
}

/// A request whose origin is already known.
///
/// # Example
///
/// ```
/// use multidomain::domain::{DomainDetector, StaticRequest};
///
/// let request = StaticRequest::new("shop.example.com").with_scheme("https");
/// let full = DomainDetector::new().detect(None, &request);
/// assert_eq!(full, "https://shop.example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRequest {
    /// Request scheme.
    pub scheme: Option<String>,
    /// Host header value.
    pub host: Option<String>,
    /// Server port.
    pub port: Option<String>,
}

impl StaticRequest {
    /// Create a request for `host` with no explicit scheme or port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            scheme: None,
            host: Some(host.into()),
            port: None,
        }
    }

    /// A request that carries nothing (no host means no domain).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the server port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }
}

impl RequestSource for StaticRequest {
    fn scheme(&self) -> Option<String> {
        self.scheme.clone()
    }

    fn host(&self) -> Option<String> {
        self.host.clone()
    }

    fn port(&self) -> Option<String> {
        self.port.clone()
    }
}

/// Request origin read from CGI / FastCGI server variables.
///
/// Variables are read through a lookup closure so tests can supply a fixed
/// environment:
///
/// - scheme: `HTTP_X_FORWARDED_PROTO`, then `REQUEST_SCHEME`, then `HTTPS`
/// - host: `HTTP_HOST`, then `SERVER_NAME`
/// - port: `HTTP_X_FORWARDED_PORT` when the scheme was forwarded, else `SERVER_PORT`
pub struct CgiRequest<F> {
    lookup: F,
}

fn env_var(key: &str) -> Result<String, VarError> {
    std::env::var(key)
}

impl CgiRequest<fn(&str) -> Result<String, VarError>> {
    /// Read server variables from the process environment.
    pub fn from_env() -> Self {
        Self { lookup: env_var }
    }
}

impl<F> CgiRequest<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    /// Read server variables through a custom lookup (for testing).
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn forwarded_proto(&self) -> Option<String> {
        // Proxies may append: "https, http"
        self.var("HTTP_X_FORWARDED_PROTO")
            .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
            .filter(|v| !v.is_empty())
    }
}

impl<F> RequestSource for CgiRequest<F>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    fn scheme(&self) -> Option<String> {
        if let Some(proto) = self.forwarded_proto() {
            return Some(proto);
        }
        if let Some(scheme) = self.var("REQUEST_SCHEME") {
            return Some(scheme);
        }
        match self.var("HTTPS") {
            Some(flag) if !flag.eq_ignore_ascii_case("off") => Some("https".to_string()),
            _ => Some("http".to_string()),
        }
    }

    fn host(&self) -> Option<String> {
        self.var("HTTP_HOST").or_else(|| self.var("SERVER_NAME"))
    }

    fn port(&self) -> Option<String> {
        if self.forwarded_proto().is_some() {
            return self.var("HTTP_X_FORWARDED_PORT");
        }
        self.var("SERVER_PORT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn static_request_builders() {
        let request = StaticRequest::new("example.com")
            .with_scheme("https")
            .with_port("8443");
        assert_eq!(request.host(), Some("example.com".to_string()));
        assert_eq!(request.scheme(), Some("https".to_string()));
        assert_eq!(request.port(), Some("8443".to_string()));
    }

    #[test]
    fn empty_static_request_has_no_host() {
        assert_eq!(StaticRequest::empty().host(), None);
    }

    #[test]
    fn cgi_prefers_http_host_over_server_name() {
        let request = CgiRequest::with_lookup(make_env(&[
            ("HTTP_HOST", "shop.example.com"),
            ("SERVER_NAME", "default.example.com"),
        ]));
        assert_eq!(request.host(), Some("shop.example.com".to_string()));
    }

    #[test]
    fn cgi_falls_back_to_server_name() {
        let request = CgiRequest::with_lookup(make_env(&[("SERVER_NAME", "example.com")]));
        assert_eq!(request.host(), Some("example.com".to_string()));
    }

    #[test]
    fn cgi_blank_host_is_absent() {
        let request = CgiRequest::with_lookup(make_env(&[("HTTP_HOST", "   ")]));
        assert_eq!(request.host(), None);
    }

    #[test]
    fn cgi_scheme_defaults_to_http() {
        let request = CgiRequest::with_lookup(make_env(&[]));
        assert_eq!(request.scheme(), Some("http".to_string()));
    }

    #[test]
    fn cgi_https_flag() {
        let on = CgiRequest::with_lookup(make_env(&[("HTTPS", "on")]));
        assert_eq!(on.scheme(), Some("https".to_string()));

        let off = CgiRequest::with_lookup(make_env(&[("HTTPS", "off")]));
        assert_eq!(off.scheme(), Some("http".to_string()));
    }

    #[test]
    fn cgi_request_scheme_beats_https_flag() {
        let request = CgiRequest::with_lookup(make_env(&[
            ("REQUEST_SCHEME", "http"),
            ("HTTPS", "on"),
        ]));
        assert_eq!(request.scheme(), Some("http".to_string()));
    }

    #[test]
    fn cgi_forwarded_proto_wins() {
        let request = CgiRequest::with_lookup(make_env(&[
            ("HTTP_X_FORWARDED_PROTO", "https, http"),
            ("REQUEST_SCHEME", "http"),
            ("SERVER_PORT", "80"),
            ("HTTP_X_FORWARDED_PORT", "443"),
        ]));
        assert_eq!(request.scheme(), Some("https".to_string()));
        assert_eq!(request.port(), Some("443".to_string()));
    }

    #[test]
    fn cgi_server_port_without_proxy() {
        let request = CgiRequest::with_lookup(make_env(&[("SERVER_PORT", "8080")]));
        assert_eq!(request.port(), Some("8080".to_string()));
    }
}
