//! Task execution seam between the scheduler and caller-supplied work.

use std::future::Future;

use async_trait::async_trait;

/// Asynchronous unit of work applied to each collection item.
///
/// Implementations receive an item together with its position in the input
/// collection and either produce a value or fail with an error. The
/// scheduler treats the work as opaque: it never retries, times out, or
/// cancels an invocation.
#[async_trait]
pub trait ItemExecutor<T, R, E>: Send + Sync + 'static
where
    T: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    /// Run the unit of work for `item` at position `index`.
    async fn execute(&self, item: T, index: usize) -> Result<R, E>;
}

/// Adapter turning a plain async closure into an [`ItemExecutor`].
///
/// Built with [`task_fn`].
#[derive(Debug, Clone)]
pub struct TaskFn<F> {
    f: F,
}

/// Wrap an async closure so it can drive a pool run.
///
/// The closure receives each item and its input position, exactly like
/// [`ItemExecutor::execute`].
pub fn task_fn<F>(f: F) -> TaskFn<F> {
    TaskFn { f }
}

#[async_trait]
impl<T, R, E, F, Fut> ItemExecutor<T, R, E> for TaskFn<F>
where
    T: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: Fn(T, usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    async fn execute(&self, item: T, index: usize) -> Result<R, E> {
        (self.f)(item, index).await
    }
}
