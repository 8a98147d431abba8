//! Connection admission control.
//!
//! At most `max` handlers run at once. The acceptor blocks on [`Admission::admit`]
//! while at capacity; waiting clients sit in the OS listen backlog rather
//! than in an in-process queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

pub struct Admission {
    permits: Arc<Semaphore>,
    active: Arc<AtomicUsize>,
    max: usize,
}

/// Held by a connection handler for its whole lifetime. Dropping it
/// releases the slot — on every exit path, including a panicking handler.
pub struct AdmissionSlot {
    _permit: OwnedSemaphorePermit,
    active: Arc<AtomicUsize>,
}

impl Drop for AdmissionSlot {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Admission {
    pub fn new(max: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max)),
            active: Arc::new(AtomicUsize::new(0)),
            max,
        }
    }

    /// Waits until a slot is free, then claims it.
    ///
    /// Invariant: `0 <= active() <= max()` at all times; the increment
    /// here and the decrement in [`AdmissionSlot::drop`] each happen
    /// exactly once per admitted connection.
    pub async fn admit(&self) -> anyhow::Result<AdmissionSlot> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .context("admission semaphore closed")?;

        self.active.fetch_add(1, Ordering::AcqRel);

        Ok(AdmissionSlot {
            _permit: permit,
            active: self.active.clone(),
        })
    }

    /// Number of handlers currently holding a slot.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    pub fn max(&self) -> usize {
        self.max
    }
}
