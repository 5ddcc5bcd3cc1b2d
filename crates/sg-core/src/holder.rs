//! Once-only holder slot.
//!
//! [`OnceHolder`] is the thread-safe rendition of the lazy singleton slot:
//! the first caller that finds the slot empty runs the initialiser, every
//! other caller (concurrent or later) gets a reference to that same value.
//! It is built from a [`OnceLock`] that publishes the value and a mutex that
//! serialises initialisers, so that infallible, fallible and seeded
//! initialisation all share one "at most one construction" guarantee.
//!
//! # Example
//! ```
//! use sg_core::OnceHolder;
//!
//! static NAMES: OnceHolder<Vec<&'static str>> = OnceHolder::new("names");
//!
//! let first = NAMES.get_or_init(|| vec!["a", "b"]);
//! let second = NAMES.get_or_init(|| unreachable!());
//! assert!(std::ptr::eq(first, second));
//! assert_eq!(NAMES.constructions(), 1);
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, warn};

use crate::counter::ConstructionCounter;
use crate::errors::{Error, Result};
use crate::state::{HolderSnapshot, HolderState};

/// A named, lazily-populated slot holding at most one `T`.
pub struct OnceHolder<T> {
    name: &'static str,
    cell: OnceLock<T>,
    init_lock: Mutex<()>,
    constructions: ConstructionCounter,
}

impl<T> OnceHolder<T> {
    /// Create an empty holder. Usable in `static` items.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
            constructions: ConstructionCounter::new(),
        }
    }

    /// Holder name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the stored value without initialising.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the stored value, running `init` first if the slot is empty.
    ///
    /// `init` runs at most once over the lifetime of the holder, however
    /// many threads race on the first call. Racing callers block until the
    /// winner has published its value. If `init` panics the slot stays
    /// empty and the next caller runs its own initialiser.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.cell.get() {
            return value;
        }

        let _guard = self.lock_init();
        if let Some(value) = self.cell.get() {
            return value;
        }
        let value = init();
        self.publish(value)
    }

    /// Fallible variant of [`get_or_init`](Self::get_or_init).
    ///
    /// If `init` returns an error the slot stays empty, nothing is counted,
    /// and the error is reported as [`Error::ConstructionFailed`].
    pub fn try_get_or_init<F, E>(&self, init: F) -> Result<&T>
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let _guard = self.lock_init();
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        match init() {
            Ok(value) => Ok(self.publish(value)),
            Err(e) => {
                warn!(holder = self.name, error = %e, "holder initialiser failed");
                Err(Error::construction_failed(self.name, e))
            }
        }
    }

    /// Seed the slot with an externally built value.
    ///
    /// Seeding does not count as a construction. Fails with
    /// [`Error::AlreadyPopulated`] if the slot already holds a value.
    pub fn set(&self, value: T) -> Result<()> {
        let _guard = self.lock_init();
        self.cell.set(value).map_err(|_| Error::AlreadyPopulated { holder: self.name })?;
        debug!(holder = self.name, "holder seeded");
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HolderState {
        if self.cell.get().is_some() {
            HolderState::Populated
        } else {
            HolderState::Empty
        }
    }

    /// Number of times an initialiser ran to completion.
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

    // Caller must hold `init_lock` and have seen the cell empty.
    fn publish(&self, value: T) -> &T {
        let total = self.constructions.record();
        debug!(holder = self.name, constructions = total, "holder populated");
        self.cell.get_or_init(|| value)
    }

    // Initialisers never leave the unit guard half-updated, so poisoning is
    // recovered rather than propagated.
    fn lock_init(&self) -> MutexGuard<'_, ()> {
        self.init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for OnceHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceHolder")
            .field("name", &self.name)
            .field("value", &self.cell.get())
            .field("constructions", &self.constructions())
            .finish()
    }
}
