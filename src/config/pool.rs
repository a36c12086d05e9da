//! Concurrency cap and pool configuration.

use std::num::NonZeroUsize;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Cap on the number of tasks admitted at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concurrency {
    /// No cap; every item is dispatched immediately.
    #[default]
    Unbounded,
    /// At most this many tasks in flight at once.
    Bounded(NonZeroUsize),
}

impl Concurrency {
    /// Cap at `limit` tasks; zero lifts the cap.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Self::Unbounded, Self::Bounded)
    }

    /// Cap at one task per available CPU core.
    #[must_use]
    pub fn per_core() -> Self {
        Self::bounded(num_cpus::get())
    }

    /// The cap, or `None` when unbounded.
    #[must_use]
    pub fn limit(self) -> Option<NonZeroUsize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(limit) => Some(limit),
        }
    }
}

impl From<usize> for Concurrency {
    fn from(limit: usize) -> Self {
        Self::bounded(limit)
    }
}

impl From<Option<usize>> for Concurrency {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::bounded)
    }
}

impl From<NonZeroUsize> for Concurrency {
    fn from(limit: NonZeroUsize) -> Self {
        Self::Bounded(limit)
    }
}

/// Pool configuration as carried in config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Cap on in-flight tasks. Zero or absent lifts the cap.
    #[serde(default)]
    pub max_concurrency: usize,
}

impl PoolConfig {
    /// Typed concurrency cap for this configuration.
    #[must_use]
    pub fn concurrency(&self) -> Concurrency {
        self.max_concurrency.into()
    }

    /// Parse a pool configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails when the input is not valid JSON for this shape.
    pub fn from_json_str(input: &str) -> AppResult<Self> {
        let cfg: Self = serde_json::from_str(input).context("invalid pool configuration")?;
        Ok(cfg)
    }
}
