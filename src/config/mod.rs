//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!
//! redirection document (YAML/JSON)
//!     → loader.rs (read bytes, pick format)
//!     → decode (parse into RedirectionTable)
//!     → Dispatcher
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_redirects, parse_config, ConfigError};
pub use schema::{
    AppConfig, FallbackConfig, FallbackMode, ListenerConfig, ObservabilityConfig,
    RedirectsConfig, TimeoutConfig,
};
