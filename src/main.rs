//! `redirector` binary.
//!
//! ```text
//!  Client ──▶ listener ──▶ middleware ──▶ Dispatcher ──┬─▶ 308 Location: <url>
//!                         (timeout,       (exact path  │
//!                          request id,     lookup)     └─▶ fallback
//!                          trace)                          (greeting / 404 / upstream)
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use redirector::config::validation::validate_config;
use redirector::config::{load_redirects, parse_config, AppConfig, ConfigError, FallbackMode};
use redirector::decode::Format;
use redirector::lifecycle::signals::shutdown_signal;
use redirector::observability::{logging, metrics};
use redirector::{fallback, Dispatcher, HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "redirector")]
#[command(about = "Serve permanent redirects from a YAML or JSON table", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML redirection document.
    #[arg(long, conflicts_with = "json")]
    yaml: Option<PathBuf>,

    /// JSON redirection document.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Bind address, e.g. 127.0.0.1:8080.
    #[arg(short, long)]
    bind: Option<String>,

    /// Forward unmatched paths to this host:port instead of the built-in fallback.
    #[arg(long)]
    upstream: Option<String>,
}

impl Cli {
    /// Config file (unvalidated) with flags applied on top, then validated.
    fn into_config(mut self) -> Result<AppConfig, ConfigError> {
        let mut config = match self.config.take() {
            Some(path) => parse_config(&path)?,
            None => AppConfig::default(),
        };
        self.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Command-line flags win over the config file.
    fn apply(self, config: &mut AppConfig) {
        if let Some(path) = self.yaml {
            config.redirects.path = Some(path);
            config.redirects.format = Some(Format::Yaml);
        }
        if let Some(path) = self.json {
            config.redirects.path = Some(path);
            config.redirects.format = Some(Format::Json);
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(upstream) = self.upstream {
            config.fallback.mode = FallbackMode::Upstream;
            config.fallback.upstream = Some(upstream);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "redirector starting");

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address)
            .context("failed to start metrics exporter")?;
    }

    let fallback = fallback::from_config(&config.fallback)?;
    let dispatcher = match &config.redirects.path {
        Some(path) => load_redirects(path, config.redirects.format, fallback)?,
        None => {
            tracing::warn!("No redirection document configured; every request uses the fallback");
            Dispatcher::new(HashMap::new(), fallback)
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        fallback = ?config.fallback.mode,
        redirections = dispatcher.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.listener.bind_address))?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(&config, dispatcher)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
