//! Redirect-or-fallback request dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use tower::Service;

use crate::observability::metrics;

/// Request handler that answers known paths with a permanent redirect and
/// hands everything else to a fallback service.
///
/// The fallback can be any `tower::Service` over axum requests whose response
/// converts into a [`Response`]: an axum `Router`, a handler turned into a
/// service, or a closure wrapped with `tower::service_fn`.
///
/// Cloning is cheap: clones share the same redirection map.
#[derive(Clone)]
pub struct Dispatcher<F> {
    redirects: Arc<HashMap<String, String>>,
    fallback: F,
}

impl<F> Dispatcher<F> {
    /// Create a dispatcher over `path -> url` redirections.
    pub fn new(redirects: HashMap<String, String>, fallback: F) -> Self {
        Self {
            redirects: Arc::new(redirects),
            fallback,
        }
    }

    /// Destination URL for an exact path, if one is configured.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.redirects.get(path).map(String::as_str)
    }

    /// Number of configured redirections.
    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }
}

impl<F> fmt::Debug for Dispatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("redirects", &self.redirects.len())
            .finish_non_exhaustive()
    }
}

/// 308 response pointing at `url`.
///
/// The URL is copied into the `Location` header untouched. A value that is not
/// a legal header value becomes axum's 500 response.
fn permanent_redirect(url: &str) -> Response {
    (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, url)]).into_response()
}

impl<F> Service<Request<Body>> for Dispatcher<F>
where
    F: Service<Request<Body>>,
    F::Response: IntoResponse,
    F::Error: Send + 'static,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = F::Error;
    type Future = BoxFuture<'static, Result<Response, F::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if let Some(url) = self.redirects.get(req.uri().path()) {
            tracing::debug!(path = %req.uri().path(), location = %url, "Redirecting");
            metrics::record_dispatch(metrics::Outcome::Redirect);
            let response = permanent_redirect(url);
            return Box::pin(std::future::ready(Ok(response)));
        }

        tracing::debug!(path = %req.uri().path(), "No redirection, using fallback");
        metrics::record_dispatch(metrics::Outcome::Fallback);
        let fut = self.fallback.call(req);
        Box::pin(async move { fut.await.map(IntoResponse::into_response) })
    }
}
