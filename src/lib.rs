//! # Fanout Pool
//!
//! Admission-controlled async fan-out for ordered collections.
//!
//! This library runs every item of a fixed, ordered collection through a
//! caller-supplied asynchronous task while admitting at most N items at
//! once, and returns the results in the original collection order — or the
//! first error a task produced, unchanged.
//!
//! ## Core Problem Solved
//!
//! All-at-once fan-out (`join_all`-style) is the wrong shape for work that
//! hits a constrained resource:
//!
//! - **Connection and handle limits**: hundreds of simultaneous requests
//!   exhaust sockets, file descriptors, or API quotas
//! - **Expensive tasks**: a cap keeps memory and CPU pressure bounded while
//!   still overlapping work
//! - **Order matters downstream**: consumers want results aligned with the
//!   input, not in completion order
//!
//! ## Key Features
//!
//! - **Admission gate**: a FIFO slot gate caps in-flight tasks; a zero or
//!   absent cap degenerates to unlimited fan-out
//! - **Order-preserving aggregation**: outcomes are collected as they
//!   arrive and sorted back into input order on success
//! - **Fail-fast**: the first task error settles the run immediately;
//!   dispatch stops and the error is returned unmodified
//! - **No cancellation**: runners already in flight keep running in the
//!   background after a failure; their outcomes are discarded
//! - **Pluggable runtime**: task runners go through a [`Spawn`] seam, with
//!   a tokio adapter behind the default `tokio-runtime` feature
//!
//! ## Example
//!
//! ```
//! use fanout_pool::pool;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doubled = pool(vec![1, 2, 3], 2, |n: i32, _index| async move {
//!     Ok::<i32, std::convert::Infallible>(n * 2)
//! })
//! .await
//! .unwrap();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # }
//! ```
//!
//! For structured call sites, build the run from parts instead:
//!
//! ```rust,ignore
//! use fanout_pool::{task_fn, PoolBuilder, PoolConfig};
//!
//! let config = PoolConfig::from_json_str(r#"{ "max_concurrency": 8 }"#)?;
//! let bodies = PoolBuilder::new(urls, task_fn(fetch_one))
//!     .config(&config)
//!     .run()
//!     .await?;
//! ```

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: gate, completion board, dispatch loop.
pub mod core;
/// Configuration models for concurrency caps.
pub mod config;
/// Builders to assemble pool runs.
pub mod builders;
/// Runtime adapters and spawner implementations.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::builders::PoolBuilder;
pub use crate::config::{Concurrency, PoolConfig};
#[cfg(feature = "tokio-runtime")]
pub use crate::core::pool;
pub use crate::core::{task_fn, ItemExecutor, Spawn, TaskFn};
#[cfg(feature = "tokio-runtime")]
pub use crate::runtime::TokioSpawner;
pub use crate::util::init_tracing;
