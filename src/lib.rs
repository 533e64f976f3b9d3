//! Permanent-redirect dispatcher.
//!
//! Requests whose path exactly matches a configured redirection get a
//! `308 Permanent Redirect`; everything else goes to a caller-supplied
//! fallback service. Redirections are decoded from YAML or JSON documents.
//!
//! ```no_run
//! use redirector::{decode_yaml, fallback};
//!
//! let yaml = b"- path: /docs\n  url: https://docs.example.com\n";
//! let dispatcher = decode_yaml(yaml, fallback::not_found())?;
//! assert_eq!(dispatcher.lookup("/docs"), Some("https://docs.example.com"));
//! # Ok::<(), redirector::DecodeError>(())
//! ```

pub mod config;
pub mod decode;
pub mod fallback;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;
pub mod routing;

pub use config::AppConfig;
pub use decode::{decode_json, decode_yaml, DecodeError, Format};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{reduce_to_mapping, Redirection, RedirectionTable};
pub use routing::Dispatcher;
