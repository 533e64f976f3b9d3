//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher and server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (dispatch outcome counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics go through the `metrics` facade; without an installed
//!   recorder they cost nothing

pub mod logging;
pub mod metrics;
