use endpoint_location::{EndpointConfig, EndpointLocation, Params};

fn main() {
    // Parse a URL string
    let mut location = EndpointLocation::parse("https://example.com:8080/path?query=value#hash")
        .expect("Failed to parse URL");

    println!("URL: {}", location.href()); // https://example.com:8080/path?query=value#hash
    println!("Protocol: {}", location.protocol()); // https:
    println!("Host: {}", location.host()); // example.com:8080
    println!("Port: {}", location.port()); // 8080
    println!("Pathname: {}", location.pathname()); // /path
    println!("Search: {}", location.search()); // ?query=value
    println!("Hash: {}", location.hash()); // #hash

    // Components are validated as they are set
    if let Err(err) = location.set_port("080") {
        println!("Rejected: {err}");
    }

    location.params_mut().insert("page", "2");
    println!("With page: {location}"); // https://example.com:8080/path?query=value&page=2#hash

    // Build from a config
    let endpoint = EndpointLocation::from_config(&EndpointConfig {
        hostname: Some("api.example.com".to_string()),
        pathname: Some("/v1/search".to_string()),
        params: Some(Params::from([("q", "rust & url")])),
        ..EndpointConfig::default()
    })
    .expect("Failed to build endpoint");

    println!("Endpoint: {endpoint}"); // https://api.example.com/v1/search?q=rust%20%26%20url
}
