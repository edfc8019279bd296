//! A URL value object with continuously validated components.
//!
//! `EndpointLocation` stores the raw parts of a URL (protocol, hostname,
//! port, pathname, query params, hash), rejects malformed values at the
//! moment they are set, and derives `host`, `search` and `href` from them.
//!
//! ```
//! use endpoint_location::EndpointLocation;
//!
//! let mut location = EndpointLocation::parse("https://api.example.com/v1/items").unwrap();
//! location.params_mut().insert("page", "2");
//! location.set_port("8443").unwrap();
//!
//! assert_eq!(location.host(), "api.example.com:8443");
//! assert_eq!(location.href(), "https://api.example.com:8443/v1/items?page=2");
//! assert!(location.set_hash("no-leading-hash").is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod codec;
mod config;
mod endpoint_location;
mod error;
mod params;
mod splitter;

// Public API
pub use codec::{
    ComponentCodec, decode_uri_component, default_decoder, default_encoder, encode_uri,
    encode_uri_component,
};
pub use config::{EndpointConfig, Source};
pub use endpoint_location::{DEFAULT_PATHNAME, DEFAULT_PROTOCOL, EndpointLocation};
pub use error::{FormatError, Result};
pub use params::Params;
