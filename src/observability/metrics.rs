//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirector_dispatch_total` (counter): requests by outcome
//!   (`redirect` or `fallback`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const DISPATCH_TOTAL: &str = "redirector_dispatch_total";

/// How a request left the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redirect,
    Fallback,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Redirect => "redirect",
            Outcome::Fallback => "fallback",
        }
    }
}

/// Count one dispatched request.
pub fn record_dispatch(outcome: Outcome) {
    metrics::counter!(DISPATCH_TOTAL, "outcome" => outcome.as_str()).increment(1);
}

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
