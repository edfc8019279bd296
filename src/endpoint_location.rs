use crate::checkers::{
    is_valid_hash, is_valid_pathname, is_valid_protocol, is_valid_search, parse_canonical_port,
};
use crate::codec::{ComponentCodec, default_decoder, default_encoder, encode_uri};
use crate::compat::{Arc, String, ToString, format};
use crate::config::{EndpointConfig, Source};
use crate::error::{FormatError, Result};
use crate::params::Params;
use crate::splitter::{split_authority, split_url};

/// Protocol of a freshly created location
pub const DEFAULT_PROTOCOL: &str = "https:";

/// Pathname of a freshly created location
pub const DEFAULT_PATHNAME: &str = "/";

/// Treat empty strings like missing values when merging.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A URL whose components are validated every time they change.
///
/// The raw components (`hash`, `hostname`, `pathname`, `port`,
/// `protocol`, `params`) are stored; `host`, `search` and `href` are
/// derived from them on every read. Setters reject values in the wrong
/// format and leave the location unchanged, so it is always valid.
///
/// Query parameters are (de)serialized with a per-instance decoder and
/// encoder, defaulting to percent-decoding and percent-encoding.
///
/// Mutation goes through `&mut self`; sharing one location between
/// threads that write to it needs an outer lock.
///
/// # Examples
///
/// ```
/// use endpoint_location::{EndpointConfig, EndpointLocation, Params};
///
/// let location = EndpointLocation::from_config(&EndpointConfig {
///     hostname: Some("example.com".into()),
///     pathname: Some("/path/to/endpoint".into()),
///     params: Some(Params::from([("hash", "of"), ("url", "parameters")])),
///     ..EndpointConfig::default()
/// })
/// .unwrap();
///
/// assert_eq!(
///     location.href(),
///     "https://example.com/path/to/endpoint?hash=of&url=parameters"
/// );
/// ```
#[derive(Clone)]
pub struct EndpointLocation {
    hash: String,
    hostname: String,
    pathname: String,
    port: String,
    protocol: String,
    params: Params,
    uri_component_decoder: ComponentCodec,
    uri_component_encoder: ComponentCodec,
}

impl Default for EndpointLocation {
    fn default() -> Self {
        Self {
            hash: String::new(),
            hostname: String::new(),
            pathname: DEFAULT_PATHNAME.to_string(),
            port: String::new(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            params: Params::new(),
            uri_component_decoder: default_decoder(),
            uri_component_encoder: default_encoder(),
        }
    }
}

impl EndpointLocation {
    /// Create `https:` location with pathname `/` and nothing else
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location from a config merged over the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first `FormatError` raised by a component of `config`.
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        let mut location = Self::new();
        location.assign(config)?;
        Ok(location)
    }

    /// Create a location from a URL string merged over the defaults.
    ///
    /// Components missing from `input` keep their defaults, so
    /// `"//example.com"` yields `https://example.com/`.
    ///
    /// # Errors
    ///
    /// Returns a `FormatError` when a captured component is malformed,
    /// e.g. a non-numeric port or a pathname without a leading `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use endpoint_location::EndpointLocation;
    ///
    /// let location = EndpointLocation::parse("https://example.com:8080/a/b?x=1&y=2#frag").unwrap();
    /// assert_eq!(location.port(), "8080");
    /// assert_eq!(location.pathname(), "/a/b");
    /// assert_eq!(location.params().get("y"), Some("2"));
    /// assert_eq!(location.hash(), "#frag");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut location = Self::new();
        location.assign(input)?;
        Ok(location)
    }

    /// Merge `source` into this location.
    ///
    /// - A config or another location contributes each non-empty string
    ///   component and each codec it carries. Its params replace ours;
    ///   failing that, a config's `search` is decoded into params.
    /// - A URL string contributes each non-empty captured component,
    ///   always replaces params with its (possibly empty) query, and
    ///   resets both codecs to their defaults. The empty string is
    ///   ignored.
    ///
    /// All components are validated before any is stored, so on error
    /// the location is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the first `FormatError` raised by a contributed component.
    pub fn assign<'a>(&mut self, source: impl Into<Source<'a>>) -> Result<()> {
        match source.into() {
            Source::Config(config) => self.assign_config(config),
            Source::Location(location) => self.assign_config(&EndpointConfig::from(location)),
            Source::Url(url) if !url.is_empty() => self.assign_url(url),
            Source::Url(_) | Source::Empty => Ok(()),
        }
    }

    fn assign_config(&mut self, config: &EndpointConfig) -> Result<()> {
        let mut staged = self.clone();

        if let Some(hash) = non_empty(config.hash.as_deref()) {
            staged.set_hash(hash)?;
        }
        if let Some(hostname) = non_empty(config.hostname.as_deref()) {
            staged.set_hostname(hostname);
        }
        if let Some(pathname) = non_empty(config.pathname.as_deref()) {
            staged.set_pathname(pathname)?;
        }
        if let Some(port) = non_empty(config.port.as_deref()) {
            staged.set_port(port)?;
        }
        if let Some(protocol) = non_empty(config.protocol.as_deref()) {
            staged.set_protocol(protocol)?;
        }
        if let Some(decoder) = &config.uri_component_decoder {
            staged.uri_component_decoder = Arc::clone(decoder);
        }
        if let Some(encoder) = &config.uri_component_encoder {
            staged.uri_component_encoder = Arc::clone(encoder);
        }

        if let Some(params) = &config.params {
            staged.params = params.clone();
        } else if let Some(search) = &config.search {
            staged.params = Params::decode(search, &*staged.uri_component_decoder);
        }

        *self = staged;
        Ok(())
    }

    fn assign_url(&mut self, url: &str) -> Result<()> {
        let parts = split_url(url);
        let (hostname, port) = parts.authority.map_or(("", ""), split_authority);
        let mut staged = self.clone();

        if !parts.hash.is_empty() {
            staged.set_hash(parts.hash)?;
        }
        if !hostname.is_empty() {
            staged.set_hostname(hostname);
        }
        if !parts.pathname.is_empty() {
            staged.set_pathname(parts.pathname)?;
        }
        if !port.is_empty() {
            staged.set_port(port)?;
        }
        if !parts.protocol.is_empty() {
            staged.set_protocol(parts.protocol)?;
        }

        // Decoded with the codec in place before the reset below
        staged.params = Params::decode(parts.search, &*staged.uri_component_decoder);
        staged.uri_component_decoder = default_decoder();
        staged.uri_component_encoder = default_encoder();

        *self = staged;
        Ok(())
    }

    /// Fragment including its leading `#`, or empty
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// # Errors
    ///
    /// `FormatError::InvalidHash` unless `hash` is empty or starts with `#`.
    pub fn set_hash(&mut self, hash: &str) -> Result<()> {
        if !is_valid_hash(hash) {
            return Err(FormatError::InvalidHash);
        }
        self.hash = hash.to_string();
        Ok(())
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Any string is a valid hostname.
    pub fn set_hostname(&mut self, hostname: &str) {
        self.hostname = hostname.to_string();
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// # Errors
    ///
    /// `FormatError::InvalidPathname` unless `pathname` starts with `/`.
    pub fn set_pathname(&mut self, pathname: &str) -> Result<()> {
        if !is_valid_pathname(pathname) {
            return Err(FormatError::InvalidPathname);
        }
        self.pathname = pathname.to_string();
        Ok(())
    }

    /// Port as a canonical decimal string, or empty
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Set or clear (with `""`) the port.
    ///
    /// # Errors
    ///
    /// `FormatError::InvalidPort` unless `port` is empty or the exact decimal
    /// form of a positive integer: `"080"`, `"3.5"`, `"-1"` and `" 80 "` are
    /// all rejected.
    pub fn set_port(&mut self, port: &str) -> Result<()> {
        if port.is_empty() {
            self.port.clear();
            return Ok(());
        }
        let value = parse_canonical_port(port).ok_or(FormatError::InvalidPort)?;
        self.port = value.to_string();
        Ok(())
    }

    /// Protocol including its trailing `:`
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// # Errors
    ///
    /// `FormatError::InvalidProtocol` unless `protocol` ends with `:`.
    pub fn set_protocol(&mut self, protocol: &str) -> Result<()> {
        if !is_valid_protocol(protocol) {
            return Err(FormatError::InvalidProtocol);
        }
        self.protocol = protocol.to_string();
        Ok(())
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn set_params(&mut self, params: impl Into<Params>) {
        self.params = params.into();
    }

    pub fn uri_component_decoder(&self) -> &ComponentCodec {
        &self.uri_component_decoder
    }

    pub fn set_uri_component_decoder(&mut self, decoder: ComponentCodec) {
        self.uri_component_decoder = decoder;
    }

    pub fn uri_component_encoder(&self) -> &ComponentCodec {
        &self.uri_component_encoder
    }

    pub fn set_uri_component_encoder(&mut self, encoder: ComponentCodec) {
        self.uri_component_encoder = encoder;
    }

    /// `hostname`, followed by `:port` when a port is set
    pub fn host(&self) -> String {
        if self.port.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// Set hostname and, when `host` has a `:` segment, port.
    ///
    /// Only the first two `:`-separated segments are used. Without a `:`
    /// the current port is kept.
    ///
    /// # Errors
    ///
    /// `FormatError::InvalidPort` when the port segment is malformed; the
    /// hostname is not changed in that case either.
    pub fn set_host(&mut self, host: &str) -> Result<()> {
        let mut segments = host.split(':');
        let hostname = segments.next().unwrap_or_default();
        if let Some(port) = segments.next() {
            self.set_port(port)?;
        }
        self.set_hostname(hostname);
        Ok(())
    }

    /// Encoded query with its leading `?`, or empty when there are no params
    pub fn search(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let mut search = String::from("?");
        search.push_str(&self.params.encode(&*self.uri_component_encoder));
        search
    }

    /// Replace params with those decoded from `search`.
    ///
    /// # Errors
    ///
    /// `FormatError::InvalidSearch` unless `search` is empty or starts with `?`.
    pub fn set_search(&mut self, search: &str) -> Result<()> {
        if !is_valid_search(search) {
            return Err(FormatError::InvalidSearch);
        }
        self.params = Params::decode(search, &*self.uri_component_decoder);
        Ok(())
    }

    /// Serialize to a URL string.
    ///
    /// Concatenates protocol, `//`, host, pathname, search and hash, then
    /// escapes whatever is unsafe in a URI. Escapes already produced by the
    /// params encoder pass through unchanged.
    pub fn href(&self) -> String {
        let search = self.search();
        let mut href = String::with_capacity(
            self.protocol.len()
                + 2
                + self.hostname.len()
                + self.port.len()
                + 1
                + self.pathname.len()
                + search.len()
                + self.hash.len(),
        );
        href.push_str(&self.protocol);
        href.push_str("//");
        href.push_str(&self.hostname);
        if !self.port.is_empty() {
            href.push(':');
            href.push_str(&self.port);
        }
        href.push_str(&self.pathname);
        href.push_str(&search);
        href.push_str(&self.hash);
        encode_uri(&href)
    }

    /// Same as `assign` with a URL string.
    ///
    /// # Errors
    ///
    /// See `assign`.
    pub fn set_href(&mut self, href: &str) -> Result<()> {
        self.assign(href)
    }
}

impl core::fmt::Debug for EndpointLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EndpointLocation")
            .field("hash", &self.hash)
            .field("hostname", &self.hostname)
            .field("pathname", &self.pathname)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl core::fmt::Display for EndpointLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

/// Compares components only; codecs are not compared.
impl PartialEq for EndpointLocation {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.hostname == other.hostname
            && self.pathname == other.pathname
            && self.port == other.port
            && self.protocol == other.protocol
            && self.params == other.params
    }
}

impl Eq for EndpointLocation {}

impl core::str::FromStr for EndpointLocation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EndpointLocation {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&EndpointConfig> for EndpointLocation {
    type Error = FormatError;

    fn try_from(config: &EndpointConfig) -> Result<Self> {
        Self::from_config(config)
    }
}
