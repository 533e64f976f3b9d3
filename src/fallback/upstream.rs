//! Fallback that forwards unmatched requests to an upstream HTTP server.
//!
//! # Design Decisions
//! - Path, query, method, headers and body are forwarded unchanged
//! - Only scheme and authority are rewritten
//! - Upstream failure maps to 502 Bad Gateway; no retries

use std::str::FromStr;

use axum::{
    body::Body,
    extract::State,
    http::{
        uri::{Authority, PathAndQuery, Scheme},
        Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use super::FallbackError;

#[derive(Clone)]
struct UpstreamState {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

/// Forward every request to `addr` (a `host:port` pair) over HTTP/1.1.
pub fn upstream(addr: &str) -> Result<Router, FallbackError> {
    let authority = Authority::from_str(addr).map_err(|source| FallbackError::InvalidUpstream {
        addr: addr.to_string(),
        source,
    })?;

    let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

    tracing::debug!(upstream = %authority, "Upstream fallback configured");
    Ok(Router::new()
        .fallback(forward)
        .with_state(UpstreamState { client, authority }))
}

fn rewrite_uri(uri: &Uri, authority: &Authority) -> Result<Uri, axum::http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.scheme = Some(Scheme::HTTP);
    parts.authority = Some(authority.clone());
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    Ok(Uri::from_parts(parts)?)
}

async fn forward(State(state): State<UpstreamState>, request: Request<Body>) -> Response {
    let (mut parts, body) = request.into_parts();

    parts.uri = match rewrite_uri(&parts.uri, &state.authority) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::warn!(uri = %parts.uri, error = %e, "Cannot build upstream URI");
            return (StatusCode::BAD_REQUEST, "Invalid request URI").into_response();
        }
    };

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(upstream = %state.authority, error = %e, "Upstream error");
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
