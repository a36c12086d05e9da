//! Configuration models for pool runs.

pub mod pool;

pub use pool::{Concurrency, PoolConfig};
