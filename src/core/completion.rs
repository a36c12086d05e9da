//! Outcome aggregation and completion tracking for one pool run.

use parking_lot::Mutex;
use tokio::sync::Notify;

/// A successfully produced value tagged with its input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<R> {
    /// Position of the originating item in the input collection.
    pub index: usize,
    /// Value produced by the task.
    pub value: R,
}

#[derive(Debug)]
struct BoardState<R, E> {
    outcomes: Vec<Outcome<R>>,
    total: usize,
    failure: Option<E>,
    failed: bool,
    settled: bool,
}

/// Collects task outcomes and resolves the overall run.
///
/// The board is a three-state machine: running, succeeded, failed. It
/// succeeds once every expected outcome has arrived and fails on the first
/// recorded failure; both terminal states are reached exactly once. All
/// bookkeeping happens under one mutex that is never held across a
/// suspension point, so concurrent runners racing to record the first
/// failure are serialized deterministically.
#[derive(Debug)]
pub struct CompletionBoard<R, E> {
    state: Mutex<BoardState<R, E>>,
    settled: Notify,
}

impl<R, E> CompletionBoard<R, E> {
    /// Create a board expecting `total` outcomes.
    ///
    /// A board for zero outcomes is settled from the start.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            state: Mutex::new(BoardState {
                outcomes: Vec::with_capacity(total),
                total,
                failure: None,
                failed: false,
                settled: total == 0,
            }),
            settled: Notify::new(),
        }
    }

    /// Record a successful outcome.
    ///
    /// Settles the run once every expected outcome has arrived. Outcomes
    /// arriving after the run has settled are discarded.
    pub fn record_success(&self, index: usize, value: R) {
        let mut state = self.state.lock();
        if state.settled {
            return;
        }
        state.outcomes.push(Outcome { index, value });
        if state.outcomes.len() == state.total {
            state.settled = true;
            self.settled.notify_one();
        }
    }

    /// Record a failure.
    ///
    /// The first recorded failure settles the run and is the one reported;
    /// later failures are discarded.
    pub fn record_failure(&self, error: E) {
        let mut state = self.state.lock();
        if state.settled {
            return;
        }
        state.failure = Some(error);
        state.failed = true;
        state.settled = true;
        self.settled.notify_one();
    }

    /// Whether a failure has been recorded.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.state.lock().failed
    }

    /// Park until the run settles, then deliver the result.
    ///
    /// Success delivers the values sorted back into input order. Intended
    /// for a single caller: the result is moved out on first delivery.
    pub async fn wait(&self) -> Result<Vec<R>, E> {
        loop {
            if let Some(result) = self.try_deliver() {
                return result;
            }
            self.settled.notified().await;
        }
    }

    fn try_deliver(&self) -> Option<Result<Vec<R>, E>> {
        let mut state = self.state.lock();
        if !state.settled {
            return None;
        }
        if let Some(error) = state.failure.take() {
            return Some(Err(error));
        }
        let mut outcomes = std::mem::take(&mut state.outcomes);
        outcomes.sort_by_key(|outcome| outcome.index);
        Some(Ok(outcomes.into_iter().map(|outcome| outcome.value).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_board_settles_immediately() {
        let board = CompletionBoard::<u32, String>::new(0);
        assert_eq!(board.wait().await.unwrap(), Vec::<u32>::new());
    }

    #[tokio::test]
    async fn outcomes_are_sorted_back_into_input_order() {
        let board = CompletionBoard::<&str, String>::new(3);
        board.record_success(2, "c");
        board.record_success(0, "a");
        board.record_success(1, "b");
        assert_eq!(board.wait().await.unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn first_failure_wins() {
        let board = CompletionBoard::<u32, &str>::new(2);
        board.record_failure("first");
        board.record_failure("second");
        assert!(board.has_failed());
        assert_eq!(board.wait().await.unwrap_err(), "first");
    }

    #[tokio::test]
    async fn outcomes_after_settle_are_discarded() {
        let board = CompletionBoard::<u32, &str>::new(2);
        board.record_success(0, 10);
        board.record_failure("fatal");
        // A straggler finishing after the failure changes nothing.
        board.record_success(1, 20);
        assert_eq!(board.wait().await.unwrap_err(), "fatal");
    }

    #[tokio::test]
    async fn success_does_not_mark_failure() {
        let board = CompletionBoard::<u32, &str>::new(1);
        board.record_success(0, 1);
        assert!(!board.has_failed());
        assert_eq!(board.wait().await.unwrap(), vec![1]);
    }
}
