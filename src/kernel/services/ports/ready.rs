//! One-shot readiness signals.

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadyError {
    #[error("ready signal was dropped before it resolved")]
    Abandoned,
}

pub struct ReadyResolver {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

pub fn ready_pair() -> (ReadyResolver, ReadySignal) {
    let (tx, rx) = watch::channel(false);
    (ReadyResolver { tx }, ReadySignal { rx })
}

impl ReadyResolver {
    pub fn resolve(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_resolved(&self) -> bool {
        *self.tx.borrow()
    }
}

impl ReadySignal {
    /// A signal that has already resolved.
    pub fn resolved() -> Self {
        let (resolver, signal) = ready_pair();
        resolver.resolve();
        signal
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn wait(&self) -> Result<(), ReadyError> {
        if self.is_ready() {
            return Ok(());
        }
        let mut rx = self.rx.clone();
        rx.wait_for(|ready| *ready)
            .await
            .map(|_| ())
            .map_err(|_| ReadyError::Abandoned)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/ready.rs"]
mod tests;
