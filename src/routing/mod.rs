//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (raw path)
//!     → dispatcher.rs (exact lookup in the redirection map)
//!     → hit:  308 Permanent Redirect, Location = stored URL
//!     → miss: caller-supplied fallback service, response passed through
//! ```
//!
//! # Design Decisions
//! - Redirection map built once, immutable at runtime (shared via Arc)
//! - Exact string match on the path as received: no trailing-slash,
//!   case or query normalization
//! - An unmatched path is not an error, it selects the fallback

pub mod dispatcher;

pub use dispatcher::Dispatcher;
