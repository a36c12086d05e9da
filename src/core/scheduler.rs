//! Dispatch loop, task runners, and the public pool operation.

use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::Concurrency;
use crate::core::{AdmissionGate, CompletionBoard, GateError, ItemExecutor, SlotPermit};

#[cfg(feature = "tokio-runtime")]
use crate::core::executor::task_fn;
#[cfg(feature = "tokio-runtime")]
use crate::runtime::TokioSpawner;

/// One unit of work: the original position plus the value fed to the
/// executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem<T> {
    /// Position of the item in the input collection.
    pub index: usize,
    /// The item itself.
    pub value: T,
}

/// Abstraction for spawning task runners on a runtime.
pub trait Spawn {
    /// Spawn an async task that runs to completion in the background.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Run every item of `collection` through `executor`, admitting at most
/// `concurrency` items at once, spawning runners via `spawner`.
///
/// Results come back in input order regardless of completion order. The
/// first failing task settles the run with its error, unmodified; dispatch
/// stops, and runners already in flight keep running in the background with
/// their outcomes discarded.
///
/// # Errors
///
/// Returns the error of the first failing task.
pub async fn run_pool<C, X, S, R, E>(
    collection: C,
    concurrency: Concurrency,
    executor: X,
    spawner: S,
) -> Result<Vec<R>, E>
where
    C: IntoIterator,
    C::Item: Send + 'static,
    X: ItemExecutor<C::Item, R, E>,
    S: Spawn,
    R: Send + 'static,
    E: Send + 'static,
{
    let items: Vec<WorkItem<C::Item>> = collection
        .into_iter()
        .enumerate()
        .map(|(index, value)| WorkItem { index, value })
        .collect();
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let run_id = Uuid::new_v4();
    let total = items.len();
    let executor = Arc::new(executor);
    let board = Arc::new(CompletionBoard::new(total));
    tracing::debug!(%run_id, total, limit = ?concurrency.limit(), "dispatch started");

    match concurrency.limit() {
        None => {
            for item in items {
                launch(&spawner, &executor, &board, None, item, run_id);
            }
        }
        Some(capacity) => {
            let gate = Arc::new(AdmissionGate::new(capacity));
            for item in items {
                if board.has_failed() {
                    tracing::debug!(%run_id, index = item.index, "dispatch stopped after failure");
                    break;
                }
                match gate.admit().await {
                    Ok(slot) => {
                        let admission = Some((Arc::clone(&gate), slot));
                        launch(&spawner, &executor, &board, admission, item, run_id);
                    }
                    Err(GateError::Closed) => break,
                }
            }
        }
    }

    board.wait().await
}

/// Start one task runner for `item`.
///
/// The runner reports its outcome to the board, then returns its slot to
/// the gate. On failure it also closes the gate so the dispatch loop and
/// any waiters observe the failure.
fn launch<T, X, S, R, E>(
    spawner: &S,
    executor: &Arc<X>,
    board: &Arc<CompletionBoard<R, E>>,
    admission: Option<(Arc<AdmissionGate>, SlotPermit)>,
    item: WorkItem<T>,
    run_id: Uuid,
) where
    T: Send + 'static,
    X: ItemExecutor<T, R, E>,
    S: Spawn,
    R: Send + 'static,
    E: Send + 'static,
{
    let executor = Arc::clone(executor);
    let board = Arc::clone(board);
    spawner.spawn(async move {
        let WorkItem { index, value } = item;
        match executor.execute(value, index).await {
            Ok(value) => {
                tracing::debug!(%run_id, index, "task completed");
                board.record_success(index, value);
            }
            Err(error) => {
                tracing::warn!(%run_id, index, "task failed; pool settling");
                board.record_failure(error);
                if let Some((gate, _)) = admission.as_ref() {
                    gate.close();
                }
            }
        }
        // The slot returns to the gate only after the outcome is recorded.
        drop(admission);
    });
}

/// Run every item in `collection` through `task`, admitting at most
/// `max_concurrency` items at once, and collect the results in input order.
///
/// A `max_concurrency` of zero (or `None`) lifts the cap and dispatches
/// every item immediately. An empty collection resolves to an empty `Vec`
/// without invoking `task`. On failure the call returns the first failing
/// task's error unchanged; tasks already in flight keep running in the
/// background and their outcomes are discarded.
///
/// Task runners are spawned on the ambient tokio runtime.
///
/// # Errors
///
/// Returns the error of the first failing task.
#[cfg(feature = "tokio-runtime")]
pub async fn pool<C, F, Fut, R, E>(
    collection: C,
    max_concurrency: impl Into<Concurrency>,
    task: F,
) -> Result<Vec<R>, E>
where
    C: IntoIterator,
    C::Item: Send + 'static,
    F: Fn(C::Item, usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    run_pool(
        collection,
        max_concurrency.into(),
        task_fn(task),
        TokioSpawner::current(),
    )
    .await
}
