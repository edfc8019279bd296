/// Hash must be empty or carry its leading `#`.
pub fn is_valid_hash(hash: &str) -> bool {
    hash.is_empty() || hash.starts_with('#')
}

pub fn is_valid_pathname(pathname: &str) -> bool {
    pathname.starts_with('/')
}

pub fn is_valid_protocol(protocol: &str) -> bool {
    protocol.ends_with(':')
}

/// Search must be empty or carry its leading `?`.
pub fn is_valid_search(search: &str) -> bool {
    search.is_empty() || search.starts_with('?')
}

/// Parse a port string that is the canonical decimal form of a positive integer.
/// Returns None for empty input, signs, whitespace, fractions, leading zeros,
/// zero itself, or values that do not fit in a u64.
pub fn parse_canonical_port(port: &str) -> Option<u64> {
    let bytes = port.as_bytes();
    let (&first, _) = bytes.split_first()?;
    if first == b'0' || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    port.parse::<u64>().ok().filter(|&value| value > 0)
}
