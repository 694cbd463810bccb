//! Query, fragment and path splitting.

/// Peel the `#fragment` and then the `?query` off the end of `rest`.
///
/// Returns `(path, query, fragment)`; absent parts are empty strings.
/// The fragment is split first so a `?` inside it stays in the fragment.
pub fn split_query_and_fragment(rest: &str) -> (&str, &str, &str) {
    let (rest, fragment) = match rest.find('#') {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    };

    let (path, query) = match rest.find('?') {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => (rest, ""),
    };

    (path, query, fragment)
}

/// Split a path on `/` into its segments.
///
/// Empty segments are kept: a leading empty segment marks an absolute
/// path, and `"/"` alone is the single segment `""`. An empty path has
/// no segments.
///
/// # Examples
///
/// ```
/// use uriref::parser::split_path;
///
/// assert_eq!(split_path("/foo/bar"), vec!["", "foo", "bar"]);
/// assert_eq!(split_path("/"), vec![""]);
/// assert!(split_path("").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    match path {
        "" => Vec::new(),
        "/" => vec![String::new()],
        _ => path.split('/').map(str::to_string).collect(),
    }
}
