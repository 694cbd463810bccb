//! Authority extraction and splitting into userinfo, host and port.

use crate::error::UriError;
use crate::grammar::decode_user_info;

/// The `[userinfo@]host[:port]` parts of an authority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority {
    /// Percent-decoded userinfo, empty if absent
    pub user_info: String,
    /// Host text, possibly empty
    pub host: String,
    /// Port number if a `:` followed the host
    pub port: Option<u16>,
}

/// Isolate the `//authority` part at the start of `rest`.
///
/// Returns the authority text (without the leading `//`) and the index of
/// the first character after it. When `rest` does not start with `//`
/// there is no authority and the index is 0.
///
/// # Examples
///
/// ```
/// use uriref::parser::parse_authority;
///
/// assert_eq!(parse_authority("//example.com/foo"), (Some("example.com"), 13));
/// assert_eq!(parse_authority("/foo//bar"), (None, 0));
/// ```
pub fn parse_authority(rest: &str) -> (Option<&str>, usize) {
    let body = match rest.strip_prefix("//") {
        Some(body) => body,
        None => return (None, 0),
    };

    let end = body
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(body.len());

    (Some(&body[..end]), end + 2)
}

/// Split authority text into its userinfo, host and port.
pub fn split_authority(authority: &str) -> Result<Authority, UriError> {
    let (user_info, host_and_port) = match authority.find('@') {
        Some(at) => (decode_user_info(&authority[..at])?, &authority[at + 1..]),
        None => (String::new(), authority),
    };

    let (host, port) = match host_and_port.find(':') {
        Some(colon) => (
            &host_and_port[..colon],
            Some(parse_port(&host_and_port[colon + 1..])?),
        ),
        None => (host_and_port, None),
    };

    Ok(Authority {
        user_info,
        host: host.to_string(),
        port,
    })
}

/// Parse port text as an unsigned 16-bit decimal number.
///
/// Every character must be an ASCII digit. Empty text is port 0.
pub fn parse_port(text: &str) -> Result<u16, UriError> {
    let mut value: u32 = 0;
    for c in text.chars() {
        let digit = c.to_digit(10).ok_or(UriError::InvalidPortCharacter(c))?;
        value = value * 10 + digit;
        if value > u32::from(u16::MAX) {
            return Err(UriError::PortOutOfRange);
        }
    }

    u16::try_from(value).map_err(|_| UriError::PortOutOfRange)
}
