//! Mount a dispatcher inside an existing axum application.
//!
//! Run with `cargo run --example embed`, then try
//! `curl -i http://127.0.0.1:8081/docs`.

use std::collections::HashMap;

use axum::{routing::get, Router};
use redirector::Dispatcher;

#[tokio::main]
async fn main() {
    let site = Router::new()
        .route("/", get(|| async { "Hello from the pretend website!" }))
        .route("/status", get(|| async { "Backend is healthy!" }));

    let redirects = HashMap::from([("/docs".to_string(), "https://docs.rs".to_string())]);
    let app = Router::new().fallback_service(Dispatcher::new(redirects, site));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8081").await.unwrap();
    println!("Listening on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
