use crate::codec::encode_uri_component;
use crate::compat::{String, Vec};

/// Query parameters of a location: an ordered mapping with unique keys.
///
/// Insertion order is kept so serialization is deterministic, but two
/// mappings holding the same pairs compare equal regardless of order.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Decode a query string into parameters.
    ///
    /// Scans for `key` or `key=value` tokens separated by `&`, `?` or `=`,
    /// running both halves through `decoder`. A key without `=` maps to an
    /// empty value, and a repeated key keeps its last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use endpoint_location::{Params, decode_uri_component};
    ///
    /// let params = Params::decode("?a=1&b=x%20y&a=2", decode_uri_component);
    /// assert_eq!(params.get("a"), Some("2"));
    /// assert_eq!(params.get("b"), Some("x y"));
    /// ```
    pub fn decode(input: &str, decoder: impl Fn(&str) -> String) -> Self {
        let is_separator = |b: u8| matches!(b, b'?' | b'=' | b'&');
        let bytes = input.as_bytes();
        let mut params = Self::new();
        let mut i = 0;

        while i < bytes.len() {
            if is_separator(bytes[i]) {
                i += 1;
                continue;
            }

            let key_start = i;
            while i < bytes.len() && !is_separator(bytes[i]) {
                i += 1;
            }
            let key = &input[key_start..i];

            // The value runs to the next '&' and may itself contain '?' or '='
            let mut value = "";
            if bytes.get(i) == Some(&b'=') {
                let value_start = i + 1;
                let value_end = memchr::memchr(b'&', &bytes[value_start..])
                    .map_or(bytes.len(), |pos| value_start + pos);
                value = &input[value_start..value_end];
                i = value_end;
            }

            params.insert(decoder(key), decoder(value));
        }

        params
    }

    /// Encode as `key=value` pairs joined with `&`, without a leading `?`.
    pub fn encode(&self, encoder: impl Fn(&str) -> String) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            result.push_str(&encoder(key));
            result.push('=');
            result.push_str(&encoder(value));
        }
        result
    }

    /// Set a key's value. An existing key keeps its position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(existing, value));
        }
        self.pairs.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(pos).1)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(as_str_pair)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Params {}

/// Serializes with `encode_uri_component`, without a leading `?`.
impl core::fmt::Display for Params {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode(encode_uri_component))
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

fn as_str_pair((k, v): &(String, String)) -> (&str, &str) {
    (k.as_str(), v.as_str())
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs
            .iter()
            .map(as_str_pair as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}
