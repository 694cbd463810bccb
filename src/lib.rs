//! uriref - RFC 3986 URI reference parser
//!
//! This crate splits a URI reference into its structural components:
//! scheme, authority (userinfo, host, port), path segments, query and fragment.
//! It does not normalize, resolve relative references, or serialize back to text.
//!
//! # Quick Start
//!
//! ```
//! use uriref::Uri;
//!
//! let uri = Uri::parse("http://joe@www.example.com:8080/foo/bar?page=1#top")?;
//! assert_eq!(uri.scheme(), "http");
//! assert_eq!(uri.user_info(), "joe");
//! assert_eq!(uri.host(), "www.example.com");
//! assert!(uri.has_port());
//! assert_eq!(uri.port(), 8080);
//! assert_eq!(uri.path(), vec!["", "foo", "bar"]);
//! assert_eq!(uri.query(), "page=1");
//! assert_eq!(uri.fragment(), "top");
//!
//! // No scheme: a relative reference
//! let relative = Uri::parse("foo/")?;
//! assert!(relative.is_relative_reference());
//! assert!(relative.contains_relative_path());
//! # Ok::<(), uriref::UriError>(())
//! ```
//!
//! # Path Segments
//!
//! | Input    | Segments          |
//! |----------|-------------------|
//! | `""`     | `[]`              |
//! | `"/"`    | `[""]`            |
//! | `"/foo"` | `["", "foo"]`     |
//! | `"foo/"` | `["foo", ""]`     |
//!
//! A leading empty segment marks an absolute path.
//!
//! # Error Handling
//!
//! Parsing returns `Result<_, UriError>`. Rejected inputs are:
//!
//! - A scheme that does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
//! - Userinfo outside the RFC 3986 character set, or with a bad `%` escape
//! - A port with non-digit characters or a value above 65535

pub use error::UriError;
pub use parser::parse_components;
pub use types::UriComponents;
pub use uri::Uri;

pub mod error;
pub mod grammar;
pub mod parser;
pub mod types;
pub mod uri;
