#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Tests for construction and `assign`
use endpoint_location::{
    EndpointConfig, EndpointLocation, FormatError, Params, Source, encode_uri_component,
};
use std::sync::Arc;

fn parse(input: &str) -> EndpointLocation {
    EndpointLocation::parse(input).unwrap()
}

#[test]
fn test_from_config() {
    let location = EndpointLocation::from_config(&EndpointConfig {
        hostname: Some("example.com".to_string()),
        pathname: Some("/path/to/endpoint".to_string()),
        params: Some(Params::from([("hash", "of"), ("url", "parameters")])),
        protocol: Some("https:".to_string()),
        ..EndpointConfig::default()
    })
    .unwrap();

    assert_eq!(
        location.href(),
        "https://example.com/path/to/endpoint?hash=of&url=parameters"
    );
}

#[test]
fn test_from_config_rejects_malformed() {
    let config = EndpointConfig {
        pathname: Some("relative".to_string()),
        ..EndpointConfig::default()
    };
    assert_eq!(
        EndpointLocation::from_config(&config),
        Err(FormatError::InvalidPathname)
    );

    let config = EndpointConfig {
        protocol: Some("https".to_string()),
        ..EndpointConfig::default()
    };
    assert_eq!(
        EndpointLocation::try_from(&config),
        Err(FormatError::InvalidProtocol)
    );
}

#[test]
fn test_parse_components() {
    let location = parse("https://example.com:8080/a/b?x=1&y=2#frag");
    assert_eq!(location.port(), "8080");
    assert_eq!(location.pathname(), "/a/b");
    assert_eq!(location.params(), &Params::from([("x", "1"), ("y", "2")]));
    assert_eq!(location.hash(), "#frag");
}

#[test]
fn test_round_trip() {
    for href in [
        "https://example.com/",
        "https://example.com:8080/a/b?x=1&y=2#frag",
        "http://localhost:3000/api/v1/users?id=42",
        "ftp://files.example.com/pub/file.txt#section-2",
    ] {
        let first = parse(href);
        let second = parse(&first.href());
        assert_eq!(first.href(), href);
        assert_eq!(second.href(), href);
        assert_eq!(first, second);
    }
}

#[test]
fn test_std_conversions() {
    let location: EndpointLocation = "https://example.com/x".parse().unwrap();
    assert_eq!(location.to_string(), "https://example.com/x");

    let location = EndpointLocation::try_from("http://h:81/").unwrap();
    assert_eq!(location.host(), "h:81");

    assert_eq!(
        "https://h:08/".parse::<EndpointLocation>(),
        Err(FormatError::InvalidPort)
    );
}

#[test]
fn test_empty_config_field_does_not_override() {
    let mut location = parse("https://example.com:8080/a#frag");

    location
        .assign(&EndpointConfig {
            hostname: Some(String::new()),
            port: Some(String::new()),
            pathname: Some(String::new()),
            hash: Some(String::new()),
            protocol: Some(String::new()),
            ..EndpointConfig::default()
        })
        .unwrap();

    assert_eq!(location.href(), "https://example.com:8080/a#frag");
}

#[test]
fn test_config_params_take_precedence_over_search() {
    let mut location = parse("https://example.com/?old=1");

    location
        .assign(&EndpointConfig {
            params: Some(Params::from([("new", "2")])),
            search: Some("?ignored=3".to_string()),
            ..EndpointConfig::default()
        })
        .unwrap();
    assert_eq!(location.search(), "?new=2");

    location
        .assign(&EndpointConfig {
            search: Some("?from=search&x=a%20b".to_string()),
            ..EndpointConfig::default()
        })
        .unwrap();
    assert_eq!(location.params(), &Params::from([("from", "search"), ("x", "a b")]));

    // An empty params mapping still replaces the current one
    location
        .assign(&EndpointConfig {
            params: Some(Params::new()),
            ..EndpointConfig::default()
        })
        .unwrap();
    assert!(location.params().is_empty());
}

#[test]
fn test_config_without_params_or_search_keeps_params() {
    let mut location = parse("https://example.com/?keep=1");
    location
        .assign(&EndpointConfig {
            hostname: Some("other.com".to_string()),
            ..EndpointConfig::default()
        })
        .unwrap();
    assert_eq!(location.href(), "https://other.com/?keep=1");
}

#[test]
fn test_config_search_uses_config_decoder() {
    let location = EndpointLocation::from_config(&EndpointConfig {
        search: Some("?q=a+b".to_string()),
        uri_component_decoder: Some(Arc::new(|s: &str| s.replace('+', " "))),
        ..EndpointConfig::default()
    })
    .unwrap();
    assert_eq!(location.params().get("q"), Some("a b"));
}

#[test]
fn test_assign_from_location() {
    let mut target = parse("http://target.com:81/t#keep");
    let mut source = parse("https://source.com/s?a=1");
    source.set_uri_component_encoder(Arc::new(|s: &str| s.to_uppercase()));

    target.assign(&source).unwrap();

    assert_eq!(target.protocol(), "https:");
    assert_eq!(target.hostname(), "source.com");
    // Empty port and hash on the source do not override
    assert_eq!(target.port(), "81");
    assert_eq!(target.hash(), "#keep");
    assert_eq!(target.pathname(), "/s");
    // Codecs travel with the source
    assert_eq!(target.search(), "?A=1");
}

#[test]
fn test_clone_is_independent() {
    let original = parse("https://example.com/?a=1");
    let mut copy = original.clone();
    copy.params_mut().insert("b", "2");
    copy.set_hostname("copy.com");

    assert_eq!(original.href(), "https://example.com/?a=1");
    assert_eq!(copy.href(), "https://copy.com/?a=1&b=2");
}

#[test]
fn test_url_assign_keeps_missing_components() {
    let mut location = parse("http://example.com:8080/keep?x=1#frag");

    location.assign("https://other.com").unwrap();

    assert_eq!(location.protocol(), "https:");
    assert_eq!(location.hostname(), "other.com");
    assert_eq!(location.port(), "8080");
    assert_eq!(location.pathname(), "/keep");
    assert_eq!(location.hash(), "#frag");
    // Params are always replaced, here by an empty set
    assert!(location.params().is_empty());
}

#[test]
fn test_url_assign_resets_codecs() {
    let mut location = EndpointLocation::new();
    location.set_uri_component_encoder(Arc::new(|s: &str| s.to_uppercase()));
    location.assign("//example.com/?k=v w").unwrap();

    assert_eq!(location.search(), "?k=v%20w");
}

#[test]
fn test_noop_sources() {
    let mut location = parse("https://example.com/?a=1#h");
    let before = location.clone();

    location.assign("").unwrap();
    location.assign(None::<&str>).unwrap();
    location.assign(Source::Empty).unwrap();
    location.assign(()).unwrap();
    location.assign(&EndpointConfig::default()).unwrap();

    assert_eq!(location, before);
    assert_eq!(location.href(), "https://example.com/?a=1#h");
}

#[test]
fn test_double_encoding_is_not_mangled() {
    let mut location = parse("https://example.com/login");
    let target = "https://x.com/?a=1&b=2";
    location.params_mut().insert("redirect", target);

    let expected = format!(
        "https://example.com/login?redirect={}",
        encode_uri_component(target)
    );
    assert_eq!(
        expected,
        "https://example.com/login?redirect=https%3A%2F%2Fx.com%2F%3Fa%3D1%26b%3D2"
    );
    assert_eq!(location.href(), expected);

    let reparsed = parse(&location.href());
    assert_eq!(reparsed.params().get("redirect"), Some(target));
}

#[test]
fn test_unsafe_characters_are_escaped() {
    let mut location = parse("https://example.com/");
    location.set_pathname("/a b/é").unwrap();
    location.set_hash("#<x>").unwrap();
    assert_eq!(location.href(), "https://example.com/a%20b/%C3%A9#%3Cx%3E");
}
