//! Core scheduling abstractions: admission gate, completion tracking, task
//! execution seam, and the dispatch loop.

pub mod completion;
pub mod error;
pub mod executor;
pub mod gate;
pub mod scheduler;

pub use completion::{CompletionBoard, Outcome};
pub use error::{AppResult, GateError};
pub use executor::{task_fn, ItemExecutor, TaskFn};
pub use gate::{AdmissionGate, SlotPermit};
#[cfg(feature = "tokio-runtime")]
pub use scheduler::pool;
pub use scheduler::{run_pool, Spawn, WorkItem};
