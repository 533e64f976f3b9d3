//! Redirection table subsystem.
//!
//! # Data Flow
//! ```text
//! decoded document
//!     → table.rs (ordered Redirection entries)
//!     → into_map() (last entry wins per path)
//!     → HashMap<path, url> handed to the dispatcher
//! ```
//!
//! # Design Decisions
//! - Entries are kept in document order; order only matters for duplicates
//! - Paths and URLs are opaque strings, never validated or normalized
//! - Reduction is pure and cannot fail

pub mod table;

pub use table::{reduce_to_mapping, Redirection, RedirectionTable};
