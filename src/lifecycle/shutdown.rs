//! Shutdown coordination for the services.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Hands out [`ShutdownSignal`]s to servers; a single [`Shutdown::trigger`]
/// reaches all of them.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half held by a running server.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
}

impl ShutdownSignal {
    /// Resolves once shutdown was triggered or the coordinator was dropped.
    pub async fn recv(mut self) {
        // Lagged cannot happen with a single message; any outcome means stop.
        let _ = self.rx.recv().await;
    }
}
