//! Builder to assemble and run a pool from its parts.

use crate::config::{Concurrency, PoolConfig};
use crate::core::{run_pool, ItemExecutor, Spawn};
#[cfg(feature = "tokio-runtime")]
use crate::runtime::TokioSpawner;

/// Fluent construction of one pool run.
///
/// ```rust,ignore
/// use fanout_pool::{task_fn, PoolBuilder};
///
/// let doubled = PoolBuilder::new(0..8u32, task_fn(|n: u32, _: usize| async move {
///     Ok::<u32, std::convert::Infallible>(n * 2)
/// }))
/// .max_concurrency(3)
/// .run()
/// .await?;
/// ```
#[derive(Debug)]
pub struct PoolBuilder<T, X> {
    items: Vec<T>,
    executor: X,
    concurrency: Concurrency,
}

impl<T, X> PoolBuilder<T, X> {
    /// Start a build from the input collection and the executor that will
    /// process it. The cap defaults to unbounded.
    pub fn new(collection: impl IntoIterator<Item = T>, executor: X) -> Self {
        Self {
            items: collection.into_iter().collect(),
            executor,
            concurrency: Concurrency::Unbounded,
        }
    }

    /// Cap the number of tasks in flight. Zero lifts the cap.
    #[must_use]
    pub fn max_concurrency(mut self, limit: impl Into<Concurrency>) -> Self {
        self.concurrency = limit.into();
        self
    }

    /// Take the concurrency cap from a configuration carrier.
    #[must_use]
    pub fn config(mut self, config: &PoolConfig) -> Self {
        self.concurrency = config.concurrency();
        self
    }

    /// Run on the ambient tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing task.
    #[cfg(feature = "tokio-runtime")]
    pub async fn run<R, E>(self) -> Result<Vec<R>, E>
    where
        T: Send + 'static,
        X: ItemExecutor<T, R, E>,
        R: Send + 'static,
        E: Send + 'static,
    {
        self.run_on(TokioSpawner::current()).await
    }

    /// Run, spawning task runners via the given spawner.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing task.
    pub async fn run_on<S, R, E>(self, spawner: S) -> Result<Vec<R>, E>
    where
        T: Send + 'static,
        X: ItemExecutor<T, R, E>,
        S: Spawn,
        R: Send + 'static,
        E: Send + 'static,
    {
        run_pool(self.items, self.concurrency, self.executor, spawner).await
    }
}
