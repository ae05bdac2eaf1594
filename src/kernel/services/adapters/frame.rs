use std::cell::Cell;

use crate::kernel::services::ports::{FrameClock, LocalBoxFuture};

/// Frame clock backed by the tokio scheduler: one frame is one cooperative yield, so every
/// task queued before the request gets to run first.
#[derive(Debug, Default)]
pub struct YieldFrameClock {
    requested: Cell<u64>,
}

impl YieldFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_requested(&self) -> u64 {
        self.requested.get()
    }
}

impl FrameClock for YieldFrameClock {
    fn next_frame(&self) -> LocalBoxFuture<'static, ()> {
        self.requested.set(self.requested.get() + 1);
        Box::pin(tokio::task::yield_now())
    }
}
