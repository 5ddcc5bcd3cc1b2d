//! Unsynchronised check-then-act holder slot.
//!
//! [`RacyHolder`] reproduces the textbook lazy singleton that reads the slot,
//! constructs when it looks empty, and writes the new instance back as three
//! independent steps. Each step is individually atomic (so the code stays
//! memory-safe), but nothing ties them together:
//!
//! * K threads that all observe the slot empty each construct their own
//!   instance, so between 1 and K constructions happen.
//! * Every constructor writes its instance into the slot; the last write
//!   wins.
//! * A caller returns whatever the slot holds right after its own write,
//!   which may already be another racer's instance, and a caller that
//!   returned early may hold an instance the slot no longer references.
//!
//! Once the racers drain, the slot never changes again.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace, warn};

use crate::counter::ConstructionCounter;
use crate::errors::{Error, Result};
use crate::state::{HolderSnapshot, HolderState};

/// A named slot whose lazy initialisation is deliberately not atomic.
pub struct RacyHolder<T> {
    name: &'static str,
    slot: Mutex<Option<Arc<T>>>,
    constructions: ConstructionCounter,
}

impl<T> RacyHolder<T> {
    /// Create an empty holder. Usable in `static` items.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
            constructions: ConstructionCounter::new(),
        }
    }

    /// Holder name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the slot.
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock_slot().clone()
    }

    /// Check the slot, construct if it looked empty, write, then re-read.
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get() {
            return value;
        }
        trace!(holder = self.name, "slot observed empty, constructing");
        let fresh = Arc::new(init());
        self.store(fresh)
    }

    /// Fallible variant of [`get_or_init`](Self::get_or_init).
    ///
    /// On error nothing is written and the failure is reported as
    /// [`Error::ConstructionFailed`]. A concurrent racer may still populate
    /// the slot in the meantime.
    pub fn try_get_or_init<F, E>(&self, init: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        trace!(holder = self.name, "slot observed empty, constructing");
        match init() {
            Ok(value) => Ok(self.store(Arc::new(value))),
            Err(e) => {
                warn!(holder = self.name, error = %e, "holder initialiser failed");
                Err(Error::construction_failed(self.name, e))
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HolderState {
        if self.lock_slot().is_some() {
            HolderState::Populated
        } else {
            HolderState::Empty
        }
    }

    /// Number of instances constructed so far, including instances that
    /// lost the race and were overwritten.
    pub fn constructions(&self) -> usize {
        self.constructions.get()
    }

    /// Point-in-time view of name, state and construction count.
    pub fn snapshot(&self) -> HolderSnapshot {
        HolderSnapshot {
            holder: self.name,
            state: self.state(),
            constructions: self.constructions(),
        }
    }

    fn store(&self, fresh: Arc<T>) -> Arc<T> {
        let total = self.constructions.record();
        let replaced = self.lock_slot().replace(Arc::clone(&fresh)).is_some();
        if replaced {
            debug!(holder = self.name, constructions = total, "racing construction overwrote slot");
        } else {
            debug!(holder = self.name, constructions = total, "holder populated");
        }
        self.get().unwrap_or(fresh)
    }

    // The slot is a plain `Option<Arc<T>>`; a poisoned guard still holds a
    // consistent value.
    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for RacyHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RacyHolder")
            .field("name", &self.name)
            .field("value", &self.get())
            .field("constructions", &self.constructions())
            .finish()
    }
}
