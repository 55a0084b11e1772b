//! Domain detection.
//!
//! Works out which domain the current process serves, either from a
//! `--domain` command-line option or from the ambient request, and
//! splits the result into scheme, host and port.

use std::fmt;

use tracing::debug;
use url::Url;

use super::request::RequestSource;

/// Command-line option naming the domain for console invocations.
pub const DOMAIN_OPTION: &str = "--domain";

/// Scheme, host and port of a full domain string.
///
/// Absent parts are empty strings. The default port of a scheme is
/// always reported as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullDomain {
    /// Scheme without `://`, e.g. `https`.
    pub scheme: String,
    /// Lowercased host name (the tenant domain).
    pub host: String,
    /// Non-default port.
    pub port: String,
}

impl FullDomain {
    /// Whether no host could be determined.
    pub fn is_empty(&self) -> bool {
        self.host.is_empty()
    }
}

impl fmt::Display for FullDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.is_empty() {
            return Ok(());
        }
        if !self.scheme.is_empty() {
            write!(f, "{}://", self.scheme)?;
        }
        write!(f, "{}", self.host)?;
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }
        Ok(())
    }
}

/// Detects the full domain of a CLI invocation or web request.
///
/// # Console detection
///
/// When an argument list is supplied, the first `--domain=<value>` token
/// (or `--domain <value>` pair) names the domain. Scanning stops at a bare
/// `--`. No match yields an empty domain.
///
/// # Web detection
///
/// Without arguments the request origin is used: `scheme://host[:port]`,
/// with the scheme defaulting to `http` and default ports omitted.
///
/// # Example
///
/// ```
/// use multidomain::domain::{DomainDetector, StaticRequest};
///
/// let detector = DomainDetector::new();
/// let args: Vec<String> = vec!["multidomain".into(), "--domain=shop.example.com".into()];
/// let full = detector.detect(Some(&args), &StaticRequest::empty());
/// assert_eq!(full, "shop.example.com");
///
/// let parts = detector.split("https://Shop.Example.com:8443");
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.host, "shop.example.com");
/// assert_eq!(parts.port, "8443");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainDetector;

impl DomainDetector {
    /// Create a detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect the full domain string.
    ///
    /// Never fails: malformed or missing input yields an empty string.
    pub fn detect(&self, args: Option<&[String]>, request: &dyn RequestSource) -> String {
        let full = match args {
            Some(args) if !args.is_empty() => self.detect_console_domain(args),
            _ => self.detect_web_domain(request),
        };
        debug!(full_domain = %full, console = args.is_some_and(|a| !a.is_empty()), "Detected domain");
        full
    }

    /// Split a full domain string into scheme, host and port.
    ///
    /// Purely syntactic. A string without `://` is read as a bare
    /// `host[:port]` and gets an empty scheme; its port is kept as written,
    /// since no scheme default applies. With a scheme, the scheme's default
    /// port is reported as empty. A trailing root dot on the host is dropped.
    pub fn split(&self, full_domain: &str) -> FullDomain {
        let trimmed = full_domain.trim();
        if trimmed.is_empty() {
            return FullDomain::default();
        }

        let has_scheme = trimmed.contains("://");
        let parsed = if has_scheme {
            Url::parse(trimmed)
        } else {
            Url::parse(&format!("http://{}", trimmed))
        };

        let Ok(url) = parsed else {
            return FullDomain::default();
        };
        let host = url.host_str().unwrap_or_default().trim_end_matches('.');
        if host.is_empty() {
            return FullDomain::default();
        }

        let port = if has_scheme {
            url.port()
        } else if host_has_port(authority(trimmed)) {
            url.port_or_known_default()
        } else {
            None
        };

        FullDomain {
            scheme: if has_scheme {
                url.scheme().to_string()
            } else {
                String::new()
            },
            host: host.to_string(),
            port: port.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    fn detect_console_domain(&self, args: &[String]) -> String {
        let Some(raw) = find_domain_option(args) else {
            return String::new();
        };
        self.split(raw).to_string()
    }

    fn detect_web_domain(&self, request: &dyn RequestSource) -> String {
        let Some(host) = request
            .host()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
        else {
            return String::new();
        };

        let scheme = request
            .scheme()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http".to_string());

        let mut origin = format!("{}://{}", scheme, host);
        if !host_has_port(&host) {
            if let Some(port) = request.port().and_then(|p| p.trim().parse::<u16>().ok()) {
                origin.push_str(&format!(":{}", port));
            }
        }

        self.split(&origin).to_string()
    }
}

/// Find the value of the `--domain` option in a raw argument list.
fn find_domain_option(args: &[String]) -> Option<&str> {
    let prefix = format!("{}=", DOMAIN_OPTION);
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value);
        }
        if arg == DOMAIN_OPTION {
            // A following flag means the option was given without a value.
            return iter
                .next()
                .map(String::as_str)
                .filter(|v| !v.starts_with('-'));
        }
    }
    None
}

/// The `host[:port]` part of a scheme-less domain string.
fn authority(input: &str) -> &str {
    input.split(['/', '?', '#']).next().unwrap_or_default()
}

/// Whether a Host header value carries an explicit `:port`.
fn host_has_port(host: &str) -> bool {
    match host.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
