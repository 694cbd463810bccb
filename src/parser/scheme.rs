//! Scheme extraction.

use crate::error::UriError;
use crate::grammar::is_valid_scheme;

/// Split an optional `scheme:` prefix off a URI reference.
///
/// Returns the scheme (if any) and the index of the first character after
/// the scheme delimiter, or 0 when there is no scheme.
///
/// The first `:` only delimits a scheme when no `/`, `?` or `#` comes before
/// it; otherwise the colon belongs to a path, query or fragment and the
/// reference is schemeless. A delimiter that is accepted but preceded by
/// text outside the scheme grammar is an error.
///
/// # Examples
///
/// ```
/// use uriref::parser::parse_scheme;
///
/// assert_eq!(parse_scheme("urn:book:fantasy").unwrap(), (Some("urn"), 4));
/// assert_eq!(parse_scheme("./a:b").unwrap(), (None, 0));
/// assert!(parse_scheme("0://example.com").is_err());
/// ```
pub fn parse_scheme(uri: &str) -> Result<(Option<&str>, usize), UriError> {
    let scheme_end = match uri.find(':') {
        Some(idx) => idx,
        None => return Ok((None, 0)),
    };

    let path_start = uri.find(|c: char| matches!(c, '/' | '?' | '#'));
    if matches!(path_start, Some(idx) if idx < scheme_end) {
        return Ok((None, 0));
    }

    let candidate = &uri[..scheme_end];
    if !is_valid_scheme(candidate) {
        return Err(UriError::InvalidScheme(candidate.to_string()));
    }

    Ok((Some(candidate), scheme_end + 1))
}
