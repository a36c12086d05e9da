//! Admission gate enforcing the concurrency cap via slot accounting.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::core::GateError;

/// Gate admitting at most `capacity` concurrent slot holders.
///
/// Built on [`tokio::sync::Semaphore`], which serves suspended callers in
/// FIFO order. A recorded failure closes the gate: every pending and future
/// [`admit`](Self::admit) then reports [`GateError::Closed`] without granting
/// a slot. Slots only exist from construction time, so the number of free
/// slots never exceeds `capacity`.
#[derive(Debug)]
pub struct AdmissionGate {
    slots: Arc<Semaphore>,
    capacity: usize,
}

/// One unit of concurrency capacity, held for the lifetime of a task run.
///
/// Dropping the permit returns the slot to the gate and wakes the oldest
/// waiter, if any.
#[derive(Debug)]
pub struct SlotPermit {
    _slot: OwnedSemaphorePermit,
}

impl AdmissionGate {
    /// Create a gate with the given number of slots.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(capacity.get())),
            capacity: capacity.get(),
        }
    }

    /// Wait for a free slot.
    ///
    /// Suspends until a slot is available or the gate has been closed.
    /// Waiters are served in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Closed`] once the gate has been closed, without
    /// granting a slot.
    pub async fn admit(&self) -> Result<SlotPermit, GateError> {
        Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map(|slot| SlotPermit { _slot: slot })
            .map_err(|_| GateError::Closed)
    }

    /// Close the gate.
    ///
    /// Pending and future admissions fail with [`GateError::Closed`].
    /// Idempotent.
    pub fn close(&self) {
        self.slots.close();
    }

    /// Whether the gate has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.slots.is_closed()
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}
