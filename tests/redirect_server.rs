//! End-to-end tests: real listener, real HTTP client.

use std::time::Duration;

use redirector::{decode_json, decode_yaml, fallback};

mod common;

const DOCUMENT_YAML: &str = "\
- path: /foo
  url: https://example.com/foo-target
- path: /bar
  url: https://example.com/bar-target
";

#[tokio::test]
async fn test_yaml_redirects_and_fallback() {
    let dispatcher = decode_yaml(DOCUMENT_YAML.as_bytes(), fallback::greeting("Hello, world!")).unwrap();
    let (addr, shutdown) = common::start_server(dispatcher).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/foo")).send().await.unwrap();
    assert_eq!(res.status(), 308);
    assert_eq!(res.headers()["location"], "https://example.com/foo-target");
    assert!(res.headers().contains_key("x-request-id"));

    let res = client.get(format!("http://{addr}/bar?ref=home")).send().await.unwrap();
    assert_eq!(res.status(), 308);
    assert_eq!(res.headers()["location"], "https://example.com/bar-target");

    let res = client.get(format!("http://{addr}/foo/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Hello, world!");

    shutdown.trigger();
}

#[tokio::test]
async fn test_redirect_applies_to_every_method() {
    let raw = br#"[{"path":"/submit","url":"/v2/submit"}]"#;
    let dispatcher = decode_json(raw, fallback::not_found()).unwrap();
    let (addr, shutdown) = common::start_server(dispatcher).await;
    let client = common::client();

    let res = client
        .post(format!("http://{addr}/submit"))
        .body("payload")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 308);
    assert_eq!(res.headers()["location"], "/v2/submit");

    let res = client.delete(format!("http://{addr}/other")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_fallback_end_to_end() {
    let backend = common::start_mock_backend("from upstream").await;
    let raw = br#"[{"path":"/old","url":"https://example.com/new"}]"#;
    let dispatcher = decode_json(raw, fallback::upstream(&backend.to_string()).unwrap()).unwrap();
    let (addr, shutdown) = common::start_server(dispatcher).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/old")).send().await.unwrap();
    assert_eq!(res.status(), 308);

    let res = client.get(format!("http://{addr}/anything")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "from upstream");

    shutdown.trigger();
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let dispatcher = decode_yaml(b"", fallback::not_found()).unwrap();
    let (addr, shutdown) = common::start_server(dispatcher).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    assert!(shutdown.trigger());
    tokio::time::sleep(Duration::from_millis(200)).await;

    let fresh = common::client();
    assert!(fresh.get(format!("http://{addr}/")).send().await.is_err());
}
