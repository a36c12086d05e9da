//! Error types for scheduler components.

use thiserror::Error;

/// Errors produced by the admission gate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// The gate was closed by a recorded failure before a slot was granted.
    #[error("gate closed before a slot was granted")]
    Closed,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
