//! URI reference parsing pipeline.
//!
//! A reference is decomposed in a fixed order, each stage consuming a prefix
//! of what the previous one left:
//! - scheme (`scheme:`)
//! - authority (`//[userinfo@]host[:port]`)
//! - fragment, then query (`?query`, `#fragment`)
//! - path segments

pub mod authority;
pub mod path;
pub mod scheme;

pub use authority::{parse_authority, parse_port, split_authority, Authority};
pub use path::{split_path, split_query_and_fragment};
pub use scheme::parse_scheme;

use tracing::{debug, trace};

use crate::error::UriError;
use crate::types::UriComponents;

/// Parse a URI reference into a fresh set of components.
///
/// # Examples
///
/// ```
/// use uriref::parse_components;
///
/// let components = parse_components("http://joe@www.example.com:8080/foo?bar#baz")?;
/// assert_eq!(components.scheme, "http");
/// assert_eq!(components.user_info, "joe");
/// assert_eq!(components.host, "www.example.com");
/// assert_eq!(components.port_opt(), Some(8080));
/// assert_eq!(components.path, vec!["", "foo"]);
/// assert_eq!(components.query, "bar");
/// assert_eq!(components.fragment, "baz");
/// # Ok::<(), uriref::UriError>(())
/// ```
pub fn parse_components(uri: &str) -> Result<UriComponents, UriError> {
    let result = run_pipeline(uri);
    if let Err(err) = &result {
        debug!(uri, error = %err, "rejected URI reference");
    }
    result
}

fn run_pipeline(uri: &str) -> Result<UriComponents, UriError> {
    let mut components = UriComponents::default();

    let (scheme, next) = parse_scheme(uri)?;
    if let Some(scheme) = scheme {
        components.scheme = scheme.to_string();
    }
    let rest = &uri[next..];

    let (authority, next) = parse_authority(rest);
    if let Some(authority) = authority {
        let Authority {
            user_info,
            host,
            port,
        } = split_authority(authority)?;
        components.user_info = user_info;
        components.host = host;
        components.has_port = port.is_some();
        components.port = port.unwrap_or(0);
    }
    let rest = &rest[next..];

    let (path, query, fragment) = split_query_and_fragment(rest);
    components.query = query.to_string();
    components.fragment = fragment.to_string();
    components.path = split_path(path);

    trace!(
        uri,
        scheme = %components.scheme,
        host = %components.host,
        port = ?components.port_opt(),
        segments = components.path.len(),
        "parsed URI reference"
    );

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let components = parse_components("http://www.example.com/foo/bar").unwrap();

        assert_eq!(components.scheme, "http");
        assert_eq!(components.host, "www.example.com");
        assert_eq!(components.path, vec!["", "foo", "bar"]);
        assert!(!components.has_port);
    }

    #[test]
    fn test_parse_urn() {
        let components = parse_components("urn:book:fantasy:Hobbit").unwrap();

        assert_eq!(components.scheme, "urn");
        assert_eq!(components.host, "");
        assert_eq!(components.path, vec!["book:fantasy:Hobbit"]);
    }

    #[test]
    fn test_parse_network_path_reference() {
        let components = parse_components("//example.com").unwrap();

        assert_eq!(components.scheme, "");
        assert_eq!(components.host, "example.com");
        assert!(components.path.is_empty());
    }

    #[test]
    fn test_authority_ends_at_query() {
        let components = parse_components("http://example.com?foo#bar").unwrap();

        assert_eq!(components.host, "example.com");
        assert!(components.path.is_empty());
        assert_eq!(components.query, "foo");
        assert_eq!(components.fragment, "bar");
    }

    #[test]
    fn test_empty_port() {
        let components = parse_components("http://example.com:/").unwrap();

        assert!(components.has_port);
        assert_eq!(components.port, 0);
        assert_eq!(components.path, vec![""]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_components("0://example.com"),
            Err(UriError::InvalidScheme("0".to_string()))
        );
        assert_eq!(
            parse_components("//%X@example.com/"),
            Err(UriError::InvalidUserInfo("%X".to_string()))
        );
        assert_eq!(
            parse_components("http://example.com:65536/"),
            Err(UriError::PortOutOfRange)
        );
    }
}
