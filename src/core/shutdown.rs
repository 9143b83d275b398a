//! Process-wide shutdown signaling.
//!
//! One cancellation token is created at process start, triggered at most
//! once by an OS interrupt or termination request, and observed by the
//! active transport runner and the orchestrator's shutdown sequence.

use tokio_util::sync::CancellationToken;
use tracing::info;

/// Handle to the process-wide cancellation signal.
///
/// Cloning shares the same underlying token: any number of observers may
/// wait on [`cancelled`](Self::cancelled), while triggering is a
/// one-shot. Tests drive it through [`trigger`](Self::trigger); the
/// binary wires it to the OS through
/// [`from_os_signals`](Self::from_os_signals).
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    token: CancellationToken,
}

impl ShutdownSignal {
    /// Create a signal that is only ever triggered manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signal wired to the OS: SIGINT (Ctrl-C) and, on Unix,
    /// SIGTERM both trigger it.
    pub fn from_os_signals() -> Self {
        let signal = Self::new();
        let token = signal.token.clone();

        tokio::spawn(async move {
            wait_for_os_signal().await;
            info!("Shutdown signal received");
            token.cancel();
        });

        signal
    }

    /// Trigger the signal. Later calls have no further effect.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Completes once the signal has been triggered.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// Whether the signal has already been triggered.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A child token for scoping a transport's internal drain to this
    /// signal.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }
}

#[cfg(unix)]
async fn wait_for_os_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(error) => {
            tracing::error!(%error, "Failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_os_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
