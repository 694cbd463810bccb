//! Error types for URI reference parsing.

use thiserror::Error;

/// Errors that can occur while parsing a URI reference.
///
/// Every variant means the input is malformed; the variants only carry
/// diagnostics about which component was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UriError {
    /// The text before the scheme delimiter is not a valid scheme.
    #[error("Invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// The userinfo contains characters outside the RFC 3986 grammar.
    #[error("Invalid userinfo: {0:?}")]
    InvalidUserInfo(String),

    /// The port contains a character that is not an ASCII digit.
    #[error("Invalid port character: {0:?}")]
    InvalidPortCharacter(char),

    /// The port number does not fit in 16 bits.
    #[error("Port number exceeds 65535")]
    PortOutOfRange,
}

impl UriError {
    /// Check if the error was raised while parsing the port.
    pub fn is_port_error(&self) -> bool {
        matches!(
            self,
            UriError::InvalidPortCharacter(_) | UriError::PortOutOfRange
        )
    }
}
