#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: endpoint_location vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use endpoint_location::{EndpointConfig, EndpointLocation, Params};
use std::hint::black_box;
use url::Url as UrlCrate;

const INPUTS: &[&str] = &[
    "http://example.com/",
    "https://example.com:8080/a/b?x=1&y=2#frag",
    "https://api.example.com/v1/search?q=hello%20world&page=2&sort=desc",
    "http://localhost:3000/api/v1/users?id=42",
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("endpoint_location", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(EndpointLocation::parse(black_box(input)).unwrap());
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(UrlCrate::parse(black_box(input)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_href(c: &mut Criterion) {
    let mut group = c.benchmark_group("href");
    let location = EndpointLocation::parse(INPUTS[2]).unwrap();
    let url = UrlCrate::parse(INPUTS[2]).unwrap();

    group.bench_function("endpoint_location", |b| {
        b.iter(|| black_box(location.href()));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| black_box(url.as_str().to_string()));
    });

    group.finish();
}

fn bench_build_from_config(c: &mut Criterion) {
    let config = EndpointConfig {
        hostname: Some("example.com".to_string()),
        pathname: Some("/path/to/endpoint".to_string()),
        params: Some(Params::from([
            ("hash", "of"),
            ("url", "parameters"),
            ("redirect", "https://x.com/?a=1&b=2"),
        ])),
        ..EndpointConfig::default()
    };

    c.bench_function("from_config_href", |b| {
        b.iter(|| {
            let location = EndpointLocation::from_config(black_box(&config)).unwrap();
            black_box(location.href())
        });
    });
}

fn bench_set_search(c: &mut Criterion) {
    let mut location = EndpointLocation::parse("https://example.com/").unwrap();
    let search = "?a=1&b=two%20words&c=%E2%9C%93&d&e=x%3Dy";

    c.bench_function("set_search", |b| {
        b.iter(|| location.set_search(black_box(search)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_href,
    bench_build_from_config,
    bench_set_search
);
criterion_main!(benches);
