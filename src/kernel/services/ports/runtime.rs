use std::future::Future;
use std::pin::Pin;

/// Boxed future for single-threaded collaborators. Surface calls run on the UI thread, so
/// nothing here needs to be `Send`.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
