use crate::compat::{Arc, String};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Pluggable string transform used to encode or decode query components.
///
/// Held per instance, so two locations can (de)serialize their parameters
/// differently.
pub type ComponentCodec = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// URI component percent-encode set
/// Everything except A-Z a-z 0-9 and - _ . ! ~ * ' ( )
pub const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whole-URI percent-encode set
/// `URI_COMPONENT_SET` minus the reserved delimiters ; , / ? : @ & = + $ #
/// `%` is left out here and handled by `encode_uri` itself.
pub const URI_SET: &AsciiSet = &URI_COMPONENT_SET
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#')
    .remove(b'%');

/// Write percent-encoded string directly to buffer
fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a single query key or value.
///
/// # Examples
///
/// ```
/// use endpoint_location::encode_uri_component;
///
/// assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
/// ```
pub fn encode_uri_component(input: &str) -> String {
    let mut buffer = String::new();
    percent_encode_into(&mut buffer, input, URI_COMPONENT_SET);
    buffer
}

/// Decode `%XX` escapes in a query key or value.
/// Malformed escapes are kept literally and invalid UTF-8 becomes U+FFFD.
pub fn decode_uri_component(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Escape characters that are unsafe anywhere in a URI.
///
/// Reserved delimiters pass through untouched, and so does any `%` that
/// already starts a `%XX` escape, so running this over a string whose
/// components were encoded by `encode_uri_component` changes nothing.
/// A stray `%` becomes `%25`.
pub fn encode_uri(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    let mut segments = input.split('%');
    if let Some(first) = segments.next() {
        percent_encode_into(&mut buffer, first, URI_SET);
    }
    for segment in segments {
        if matches!(segment.as_bytes(), [hi, lo, ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
        {
            buffer.push('%');
        } else {
            buffer.push_str("%25");
        }
        percent_encode_into(&mut buffer, segment, URI_SET);
    }
    buffer
}

/// Default decoder: `decode_uri_component`
pub fn default_decoder() -> ComponentCodec {
    Arc::new(decode_uri_component)
}

/// Default encoder: `encode_uri_component`
pub fn default_encoder() -> ComponentCodec {
    Arc::new(encode_uri_component)
}
