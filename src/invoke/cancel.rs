//! Composite cancellation: caller signal OR deadline, whichever fires first.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A merged cancellation token fired by either the caller's token or an
/// internal deadline.
///
/// The merged token is what gets handed to the downstream call, so the
/// callee observes a single signal regardless of which source fired. The
/// deadline watcher is aborted when the composite is dropped, so a fast
/// response does not leave a timer task behind.
pub struct CompositeCancel {
    merged: CancellationToken,
    watcher: JoinHandle<()>,
}

impl CompositeCancel {
    pub fn new(caller: &CancellationToken, budget: Duration) -> Self {
        let merged = CancellationToken::new();
        let fire = merged.clone();
        let caller = caller.clone();
        let watcher = tokio::spawn(async move {
            tokio::select! {
                _ = caller.cancelled() => {}
                _ = tokio::time::sleep(budget) => {}
            }
            fire.cancel();
        });
        Self { merged, watcher }
    }

    /// The single token to pass downstream.
    pub fn token(&self) -> CancellationToken {
        self.merged.clone()
    }

    /// Resolves once either source has fired.
    pub async fn cancelled(&self) {
        self.merged.cancelled().await;
    }

    pub fn is_cancelled(&self) -> bool {
        self.merged.is_cancelled()
    }
}

impl Drop for CompositeCancel {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
