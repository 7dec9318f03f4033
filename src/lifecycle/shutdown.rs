//! Shutdown coordination.

use tokio::sync::broadcast;

/// One-shot stop signal for a running [`RelayServer`](crate::RelayServer).
///
/// `RelayServer::run` holds a receiver and stops accepting once it fires.
/// The binary fires it from the Ctrl+C task; the integration harness fires
/// it when a `TestRelay` is dropped, so each test's relay releases its port.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Subscribers that already exited are
    /// ignored.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
