// Signal handling module
//
// Supported signals:
// - SIGTERM: shutdown
// - SIGINT:  shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

/// Shutdown notification shared between the signal task and the accept loop.
pub struct ShutdownSignal {
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notify: Arc::new(Notify::new()),
        }
    }

    /// Wait until a shutdown signal has been received.
    pub async fn notified(&self) {
        self.notify.notified().await;
    }

    /// Start the background task listening for process signals (Unix only).
    #[cfg(unix)]
    pub fn start(&self) {
        use tokio::signal::unix::{signal, SignalKind};

        let notify = Arc::clone(&self.notify);
        tokio::spawn(async move {
            let mut sigterm =
                signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
            let mut sigint =
                signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

            tokio::select! {
                _ = sigterm.recv() => {}
                _ = sigint.recv() => {}
            }
            notify.notify_waiters();
        });
    }

    /// Windows fallback - only handles Ctrl+C
    #[cfg(not(unix))]
    pub fn start(&self) {
        let notify = Arc::clone(&self.notify);
        tokio::spawn(async move {
            if let Ok(()) = tokio::signal::ctrl_c().await {
                notify.notify_waiters();
            }
        });
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
