use super::runtime::LocalBoxFuture;

/// Animation-frame deferral. Futures resolve in request order.
pub trait FrameClock {
    fn next_frame(&self) -> LocalBoxFuture<'static, ()>;
}
