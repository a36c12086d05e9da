//! Builders to assemble pool runs.

pub mod pool_builder;

pub use pool_builder::PoolBuilder;
