//! Shutdown coordination.
//!
//! `main` triggers it from the signal handler; integration tests trigger it
//! directly to stop a server they started on a loopback port.

use tokio::sync::broadcast;

/// Tells a running [`HttpServer`](crate::http::HttpServer) to stop accepting
/// connections and drain.
///
/// Take a receiver with [`subscribe`](Self::subscribe) before handing it to
/// `HttpServer::run`; a trigger sent before subscribing is not replayed.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver for `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. Returns false when no server was
    /// listening (already stopped, or never started).
    pub fn trigger(&self) -> bool {
        let delivered = self.tx.send(()).is_ok();
        tracing::debug!(servers = self.tx.receiver_count(), delivered, "Shutdown triggered");
        delivered
    }

    /// Servers that have not yet returned from `run`.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
