//! Reusable URI reference parser.

use std::str::FromStr;

use crate::error::UriError;
use crate::parser::parse_components;
use crate::types::UriComponents;

/// A URI reference parser holding the result of its last successful parse.
///
/// The same instance can be reused for any number of inputs. Each call to
/// [`Uri::parse_from_string`] derives every component from scratch, and the
/// stored result is only replaced when the whole input parses.
///
/// # Examples
///
/// ```
/// use uriref::Uri;
///
/// let mut uri = Uri::new();
/// uri.parse_from_string("http://www.example.com:8080/foo/bar")?;
/// assert_eq!(uri.host(), "www.example.com");
/// assert_eq!(uri.port(), 8080);
///
/// uri.parse_from_string("/foo/bar")?;
/// assert_eq!(uri.host(), "");
/// assert!(!uri.has_port());
/// # Ok::<(), uriref::UriError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    components: UriComponents,
}

impl Uri {
    /// Create a parser with every component empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URI reference into a new instance.
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        Ok(Self {
            components: parse_components(uri)?,
        })
    }

    /// Parse `uri`, replacing the stored components on success.
    ///
    /// On error the components from the previous successful parse are left
    /// untouched.
    pub fn parse_from_string(&mut self, uri: &str) -> Result<(), UriError> {
        self.components = parse_components(uri)?;
        Ok(())
    }

    /// The components of the last successful parse.
    pub fn components(&self) -> &UriComponents {
        &self.components
    }

    /// Scheme without the trailing `:`, empty for a relative reference.
    pub fn scheme(&self) -> String {
        self.components.scheme.clone()
    }

    /// Percent-decoded userinfo, empty if absent.
    pub fn user_info(&self) -> String {
        self.components.user_info.clone()
    }

    /// Host text, empty if there is no authority.
    pub fn host(&self) -> String {
        self.components.host.clone()
    }

    /// Path segments; a leading empty segment marks an absolute path.
    pub fn path(&self) -> Vec<String> {
        self.components.path.clone()
    }

    /// Whether the authority carried a port.
    pub fn has_port(&self) -> bool {
        self.components.has_port
    }

    /// Port number; only meaningful when [`Uri::has_port`] is true.
    pub fn port(&self) -> u16 {
        self.components.port
    }

    /// Query string without the leading `?`.
    pub fn query(&self) -> String {
        self.components.query.clone()
    }

    /// Fragment without the leading `#`.
    pub fn fragment(&self) -> String {
        self.components.fragment.clone()
    }

    /// True when the reference has no scheme.
    pub fn is_relative_reference(&self) -> bool {
        self.components.is_relative_reference()
    }

    /// False only when the path starts with the empty absolute-path segment.
    pub fn contains_relative_path(&self) -> bool {
        self.components.contains_relative_path()
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl From<UriComponents> for Uri {
    fn from(components: UriComponents) -> Self {
        Self { components }
    }
}
