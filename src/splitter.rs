/// Components of a URL string as captured by
/// `^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?`
///
/// Delimiters are kept where the location stores them: `protocol` keeps
/// its trailing `:` and `hash` its leading `#`; `search` drops the `?`.
/// Absent components are empty, except `authority`, which distinguishes
/// "no `//`" from an empty authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    pub protocol: &'a str,
    pub authority: Option<&'a str>,
    pub pathname: &'a str,
    pub search: &'a str,
    pub hash: &'a str,
}

/// Split a URL string into its components.
///
/// Every input matches (possibly with all components empty), so this
/// never fails.
pub fn split_url(input: &str) -> UrlParts<'_> {
    let mut parts = UrlParts::default();
    let mut rest = input;

    // Scheme: one or more bytes up to the first ':' with no '/', '?' or '#' before it
    let scheme_end = rest
        .bytes()
        .position(|b| matches!(b, b':' | b'/' | b'?' | b'#'))
        .filter(|&pos| pos > 0 && rest.as_bytes()[pos] == b':');
    if let Some(pos) = scheme_end {
        parts.protocol = &rest[..=pos];
        rest = &rest[pos + 1..];
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .bytes()
            .position(|b| matches!(b, b'/' | b'?' | b'#'))
            .unwrap_or(after.len());
        parts.authority = Some(&after[..end]);
        rest = &after[end..];
    }

    let end = memchr::memchr2(b'?', b'#', rest.as_bytes()).unwrap_or(rest.len());
    parts.pathname = &rest[..end];
    rest = &rest[end..];

    if let Some(after) = rest.strip_prefix('?') {
        let end = memchr::memchr(b'#', after.as_bytes()).unwrap_or(after.len());
        parts.search = &after[..end];
        rest = &after[end..];
    }

    if rest.starts_with('#') {
        parts.hash = &rest[..line_end(rest)];
    }

    parts
}

/// Byte offset of the first line terminator (`\n`, `\r`, U+2028, U+2029),
/// which ends the hash capture.
fn line_end(input: &str) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        .map_or(input.len(), |(pos, _)| pos)
}

/// Split an authority on its first ':' into (hostname, port).
/// The port is empty when there is no ':'.
pub fn split_authority(authority: &str) -> (&str, &str) {
    authority.split_once(':').unwrap_or((authority, ""))
}
