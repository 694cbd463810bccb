//! RFC 3986 character classes and component grammars.
//!
//! Only the productions the parser needs are covered:
//!
//! ```text
//! scheme      = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! userinfo    = *( unreserved / pct-encoded / sub-delims / ":" )
//! pct-encoded = "%" HEXDIG HEXDIG
//! unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! sub-delims  = "!" / "$" / "&" / "'" / "(" / ")"
//!             / "*" / "+" / "," / ";" / "="
//! ```

use percent_encoding::percent_decode_str;

use crate::error::UriError;

/// `unreserved` from RFC 3986 section 2.3.
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// `sub-delims` from RFC 3986 section 2.2.
pub fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Check a candidate scheme against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// # Examples
///
/// ```
/// use uriref::grammar::is_valid_scheme;
///
/// assert!(is_valid_scheme("x+"));
/// assert!(!is_valid_scheme("0x"));
/// assert!(!is_valid_scheme(""));
/// ```
pub fn is_valid_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(is_scheme_char),
        _ => false,
    }
}

/// Check a candidate userinfo against the RFC 3986 `userinfo` production.
///
/// A `%` must be followed by exactly two hex digits.
pub fn is_valid_user_info(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == '%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else if is_unreserved(c) || is_sub_delim(c) || c == ':' {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

/// Validate a userinfo candidate and replace every `%XX` escape with its byte.
///
/// Escapes are decoded left to right without overlap, so `%2541` yields `%41`.
/// Byte sequences that are not UTF-8 become U+FFFD replacement characters.
///
/// # Examples
///
/// ```
/// use uriref::grammar::decode_user_info;
///
/// assert_eq!(decode_user_info("%41").unwrap(), "A");
/// assert!(decode_user_info("{").is_err());
/// ```
pub fn decode_user_info(candidate: &str) -> Result<String, UriError> {
    if !is_valid_user_info(candidate) {
        return Err(UriError::InvalidUserInfo(candidate.to_string()));
    }

    Ok(percent_decode_str(candidate).decode_utf8_lossy().into_owned())
}
