//! Core data structures for parsed URI references.

/// Components of a parsed URI reference.
///
/// A fresh value is produced by every parse; nothing is carried over from
/// a previous input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriComponents {
    /// URI scheme (e.g., "http", "urn"), empty for a relative reference
    pub scheme: String,
    /// Percent-decoded userinfo (e.g., "joe:secret"), empty if absent
    pub user_info: String,
    /// Host text (e.g., "www.example.com"), empty if there is no authority
    pub host: String,
    /// Whether the authority carried a port
    pub has_port: bool,
    /// Port number, meaningful only when `has_port` is set
    pub port: u16,
    /// Path segments; a leading empty segment marks an absolute path
    pub path: Vec<String>,
    /// Query string without the leading ?
    pub query: String,
    /// Fragment without the leading #
    pub fragment: String,
}

impl UriComponents {
    /// Check if a scheme is present.
    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }

    /// Check if userinfo is present.
    pub fn has_user_info(&self) -> bool {
        !self.user_info.is_empty()
    }

    /// Check if a query string is present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Port as an `Option`, `None` when no port was given.
    pub fn port_opt(&self) -> Option<u16> {
        self.has_port.then_some(self.port)
    }

    /// A relative reference is one without a scheme.
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_empty()
    }

    /// The path is relative unless its first segment is the empty
    /// absolute-path marker. An empty path counts as relative.
    pub fn contains_relative_path(&self) -> bool {
        match self.path.first() {
            Some(first) => !first.is_empty(),
            None => true,
        }
    }
}
