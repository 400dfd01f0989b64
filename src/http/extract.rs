/// Longest value the extractor will copy out of a request.
pub const MAX_VALUE_LEN: usize = 99;

/// Scans `haystack` for the first `name=` token and returns the value bytes
/// that follow it.
///
/// The value ends at the first `&`, the first space, or after
/// [`MAX_VALUE_LEN`] bytes, whichever comes first. No decoding is performed:
/// `+` and `%XX` escapes pass through literally. Only the first occurrence of
/// the field is honored.
///
/// The match is a raw substring search, so a field name that ends with `name`
/// (e.g. `old_username=` when looking for `username`) also matches.
///
/// Returns `None` when `name=` does not occur within `haystack`. A field with
/// an empty value returns `Some(&[])`, which is distinct from absent.
///
/// # Example
///
/// ```
/// # use formtap::http::extract::extract;
/// let body = b"username=alice&password=secret";
/// assert_eq!(extract(body, "username"), Some(&b"alice"[..]));
/// assert_eq!(extract(body, "email"), None);
/// ```
pub fn extract<'a>(haystack: &'a [u8], name: &str) -> Option<&'a [u8]> {
    let value_start = find_field(haystack, name.as_bytes())?;
    let rest = &haystack[value_start..];

    let end = rest
        .iter()
        .take(MAX_VALUE_LEN)
        .position(|&b| b == b'&' || b == b' ')
        .unwrap_or_else(|| rest.len().min(MAX_VALUE_LEN));

    Some(&rest[..end])
}

/// Returns the index just past the `=` of the first `name=` occurrence.
fn find_field(haystack: &[u8], name: &[u8]) -> Option<usize> {
    let token_len = name.len() + 1;
    haystack
        .windows(token_len)
        .position(|w| &w[..name.len()] == name && w[name.len()] == b'=')
        .map(|pos| pos + token_len)
}
