use crate::codec::ComponentCodec;
use crate::compat::{Arc, String, ToString};
use crate::endpoint_location::EndpointLocation;
use crate::params::Params;

/// Partial description of a location, merged into an existing one by
/// `EndpointLocation::assign`.
///
/// Every field is optional. A string field that is `None` *or empty*
/// leaves the target's value alone, so an empty string cannot be used to
/// clear a component; use the setters for that. `params` wins over
/// `search` when both are given, and an empty `params` still replaces
/// the target's parameters.
#[derive(Clone, Default)]
pub struct EndpointConfig {
    pub hash: Option<String>,
    pub hostname: Option<String>,
    pub pathname: Option<String>,
    pub port: Option<String>,
    pub protocol: Option<String>,
    pub params: Option<Params>,
    pub search: Option<String>,
    pub uri_component_decoder: Option<ComponentCodec>,
    pub uri_component_encoder: Option<ComponentCodec>,
}

impl core::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("hash", &self.hash)
            .field("hostname", &self.hostname)
            .field("pathname", &self.pathname)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("params", &self.params)
            .field("search", &self.search)
            .field("uri_component_decoder", &self.uri_component_decoder.is_some())
            .field("uri_component_encoder", &self.uri_component_encoder.is_some())
            .finish()
    }
}

/// A full config snapshot of an existing location.
impl From<&EndpointLocation> for EndpointConfig {
    fn from(location: &EndpointLocation) -> Self {
        Self {
            hash: Some(location.hash().to_string()),
            hostname: Some(location.hostname().to_string()),
            pathname: Some(location.pathname().to_string()),
            port: Some(location.port().to_string()),
            protocol: Some(location.protocol().to_string()),
            params: Some(location.params().clone()),
            search: None,
            uri_component_decoder: Some(Arc::clone(location.uri_component_decoder())),
            uri_component_encoder: Some(Arc::clone(location.uri_component_encoder())),
        }
    }
}

/// Anything a location can be assigned from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Merge the set fields of a config
    Config(&'a EndpointConfig),
    /// Merge the non-empty fields of another location
    Location(&'a EndpointLocation),
    /// Parse a URL string; the empty string is ignored
    Url(&'a str),
    /// Nothing to assign
    Empty,
}

impl<'a> From<&'a EndpointConfig> for Source<'a> {
    fn from(config: &'a EndpointConfig) -> Self {
        Self::Config(config)
    }
}

impl<'a> From<&'a EndpointLocation> for Source<'a> {
    fn from(location: &'a EndpointLocation) -> Self {
        Self::Location(location)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(url: &'a str) -> Self {
        Self::Url(url)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(url: &'a String) -> Self {
        Self::Url(url)
    }
}

impl<'a> From<Option<&'a str>> for Source<'a> {
    fn from(url: Option<&'a str>) -> Self {
        url.map_or(Self::Empty, Self::Url)
    }
}

impl From<()> for Source<'_> {
    fn from((): ()) -> Self {
        Self::Empty
    }
}
