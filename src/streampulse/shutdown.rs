//! Cooperative shutdown for the loop binaries.
//!
//! Each binary wires one [`StopHandle`]/[`StopToken`] pair: the handle side
//! watches for a process termination signal, the token side is checked by the
//! publish or receive loop on every iteration. Tests stop a loop
//! deterministically by calling [`StopHandle::stop`] directly instead of
//! raising a signal.

use log::{info, warn};
use tokio::sync::watch;

/// Create a connected handle/token pair for one pipeline process
pub fn stop_channel() -> (StopHandle, StopToken) {
    let (tx, rx) = watch::channel(None);
    (StopHandle { tx }, StopToken { rx })
}

/// Requests a stop; held by the signal listener (or a test)
pub struct StopHandle {
    tx: watch::Sender<Option<&'static str>>,
}

impl StopHandle {
    /// Ask every listening loop to wind down
    pub fn stop(&self, reason: &'static str) {
        if self.tx.send(Some(reason)).is_err() {
            warn!("Stop requested ({}) but no loop is listening", reason);
        }
    }

    /// Wait for a termination signal from the OS, then stop the loops.
    /// Typically spawned as a background task.
    pub async fn stop_on_signal(self) {
        let reason = termination_signal().await;
        info!("Received {}, winding down", reason);
        self.stop(reason);
    }
}

/// Observed by a loop; resolves once a stop has been requested
#[derive(Clone)]
pub struct StopToken {
    rx: watch::Receiver<Option<&'static str>>,
}

impl StopToken {
    /// Waits until a stop is requested and returns the reason.
    ///
    /// Also resolves when the handle is dropped without an explicit stop, so
    /// a loop can never outlive its controller.
    pub async fn stopped(&mut self) -> &'static str {
        loop {
            if let Some(reason) = *self.rx.borrow_and_update() {
                return reason;
            }
            if self.rx.changed().await.is_err() {
                return "stop handle dropped";
            }
        }
    }

    /// Non-blocking check, for code outside a select
    pub fn is_stopped(&self) -> bool {
        self.rx.borrow().is_some()
    }
}

/// Resolves with the name of the first termination signal the process gets
#[cfg(unix)]
async fn termination_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt =
        signal(SignalKind::interrupt()).expect("SIGINT handler installation failed");
    let mut terminate =
        signal(SignalKind::terminate()).expect("SIGTERM handler installation failed");

    tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    }
}

/// Windows fallback: only Ctrl+C is available
#[cfg(not(unix))]
async fn termination_signal() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("Ctrl+C handler installation failed");
    "Ctrl+C"
}
