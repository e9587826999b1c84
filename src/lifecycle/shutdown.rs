//! In-process stop switch for running servers.
//!
//! `main` and the integration tests each own one `Shutdown`. The receiver
//! handed to [`HttpServer::run`](crate::http::HttpServer::run) is raced
//! against OS signals in [`shutdown_signal`](super::shutdown_signal), so a
//! test can stop its server without sending a signal to the whole process.

use tokio::sync::broadcast;

/// Owner side of the stop switch.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // One slot: a second trigger before anyone reads adds nothing.
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to a server's `run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop accepting and drain. Harmless when
    /// no server is running.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_without_subscribers() {
        let shutdown = Shutdown::default();
        assert_eq!(shutdown.receiver_count(), 0);
        shutdown.trigger();
    }

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }
}
