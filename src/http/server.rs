//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with the dispatcher as its catch-all service
//! - Wire up middleware (timeout, request ID, tracing)
//! - Serve on a listener until shutdown is signalled

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{request_span, MakeRequestUuidV4, X_REQUEST_ID};
use crate::routing::Dispatcher;

/// HTTP server for the redirector.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that sends every request through `dispatcher`.
    pub fn new<F>(config: &AppConfig, dispatcher: Dispatcher<F>) -> Self
    where
        F: Service<Request<Body>, Error = Infallible> + Clone + Send + Sync + 'static,
        F::Response: IntoResponse,
        F::Future: Send + 'static,
    {
        let router = Self::build_router(config, dispatcher);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<F>(config: &AppConfig, dispatcher: Dispatcher<F>) -> Router
    where
        F: Service<Request<Body>, Error = Infallible> + Clone + Send + Sync + 'static,
        F::Response: IntoResponse,
        F::Future: Send + 'static,
    {
        Router::new()
            .fallback_service(dispatcher)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
