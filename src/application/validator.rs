//! URL validity check by hostname resolution.
//!
//! A URL is considered valid when the string left after removing its scheme
//! resolves to at least one address. Syntax, scheme, path and HTTP reachability
//! are not checked. Anything after the host (a path, a port) is passed to the
//! resolver unchanged, so such inputs usually fail to resolve.

use async_trait::async_trait;
use regex::Regex;
use std::io;
use std::net::IpAddr;
use std::sync::{Arc, LazyLock};
use tracing::{debug, info, warn};

/// Matches a leading `scheme://` or bare `//`. Scheme characters are ASCII only.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+:)?//").unwrap());

/// Error produced by a [`HostResolver`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("host not found: {host}")]
    NotFound { host: String },

    #[error("failed to look up {host}: {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// Resolves a host name to addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|source| LookupError::Lookup {
                host: host.to_string(),
                source,
            })?;

        let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
        if ips.is_empty() {
            return Err(LookupError::NotFound {
                host: host.to_string(),
            });
        }

        Ok(ips)
    }
}

/// Strips a leading `scheme://` (or bare `//`) prefix.
///
/// Only the first occurrence at the start of the string is removed.
pub fn format_url(url: &str) -> String {
    SCHEME_REGEX.replace(url, "").into_owned()
}

/// Decides whether a submitted URL is acceptable for shortening.
pub struct HostnameValidator {
    resolver: Arc<dyn HostResolver>,
}

impl HostnameValidator {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validator using the system resolver.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemResolver))
    }

    /// Returns `true` if the URL's scheme-stripped remainder resolves.
    ///
    /// Every lookup failure yields `false`; the failure kind only affects logging.
    pub async fn is_url_valid(&self, url: &str) -> bool {
        let host = format_url(url);

        match self.resolver.lookup(&host).await {
            Ok(addrs) => {
                debug!("Resolved {} to {:?}", host, addrs);
                true
            }
            Err(LookupError::NotFound { .. }) => {
                info!("Could not resolve url: {}", url);
                false
            }
            Err(e) => {
                warn!("DNS lookup error: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_format_url_strips_scheme() {
        assert_eq!(format_url("https://example.com"), "example.com");
        assert_eq!(format_url("http://example.com/path"), "example.com/path");
        assert_eq!(format_url("ftp://files.example.com"), "files.example.com");
    }

    #[test]
    fn test_format_url_strips_protocol_relative_prefix() {
        assert_eq!(format_url("//example.com"), "example.com");
    }

    #[test]
    fn test_format_url_leaves_bare_host() {
        assert_eq!(format_url("example.com"), "example.com");
        assert_eq!(format_url("example.com//x"), "example.com//x");
    }

    #[test]
    fn test_format_url_ignores_non_ascii_scheme() {
        assert_eq!(format_url("ñ://example.com"), "ñ://example.com");
        assert_eq!(format_url("hé://example.com"), "hé://example.com");
    }

    #[test]
    fn test_format_url_strips_only_leading_prefix() {
        assert_eq!(
            format_url("https://example.com/?next=http://other.com"),
            "example.com/?next=http://other.com"
        );
        assert_eq!(format_url("mailto:user@example.com"), "mailto:user@example.com");
    }

    #[tokio::test]
    async fn test_is_url_valid_resolves_stripped_host() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .withf(|host| host == "example.com")
            .times(1)
            .returning(|_| Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))]));

        let validator = HostnameValidator::new(Arc::new(resolver));

        assert!(validator.is_url_valid("https://example.com").await);
    }

    #[tokio::test]
    async fn test_is_url_valid_false_when_not_found() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(1).returning(|host| {
            Err(LookupError::NotFound {
                host: host.to_string(),
            })
        });

        let validator = HostnameValidator::new(Arc::new(resolver));

        assert!(!validator.is_url_valid("https://nope.invalid").await);
    }

    #[tokio::test]
    async fn test_is_url_valid_false_on_lookup_error() {
        let mut resolver = MockHostResolver::new();
        resolver.expect_lookup().times(1).returning(|host| {
            Err(LookupError::Lookup {
                host: host.to_string(),
                source: io::Error::other("resolver unavailable"),
            })
        });

        let validator = HostnameValidator::new(Arc::new(resolver));

        assert!(!validator.is_url_valid("https://example.com").await);
    }

    #[tokio::test]
    async fn test_system_resolver_resolves_localhost() {
        let addrs = SystemResolver.lookup("localhost").await.unwrap();

        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|ip| ip.is_loopback()));
    }
}
