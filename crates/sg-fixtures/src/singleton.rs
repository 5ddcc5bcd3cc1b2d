//! Lazily-initialised process-wide `Singleton`.
//!
//! The constructor is private to this module, so
//! [`Singleton::get_instance`] is the only way to obtain an instance:
//!
//! ```compile_fail,E0451
//! let s = sg_fixtures::Singleton { generation: 1 };
//! ```
//!
//! ```compile_fail,E0624
//! let s = sg_fixtures::Singleton::new();
//! ```
//!
//! The holder slot starts empty and is populated by the first call; it is
//! never cleared.

use sg_core::{ConstructionCounter, HolderSnapshot, OnceHolder};
use tracing::trace;

static INSTANCE: OnceHolder<Singleton> = OnceHolder::new("Singleton");
static CONSTRUCTIONS: ConstructionCounter = ConstructionCounter::new();

/// The process-wide instance. Carries no payload beyond its identity.
#[derive(Debug)]
pub struct Singleton {
    generation: usize,
}

impl Singleton {
    fn new() -> Self {
        let generation = CONSTRUCTIONS.record();
        trace!(generation, "constructing Singleton");
        Self { generation }
    }

    /// Return the process-wide instance, constructing it on first call.
    ///
    /// Every call, from any thread, returns the same reference.
    pub fn get_instance() -> &'static Singleton {
        INSTANCE.get_or_init(Self::new)
    }

    /// How many times the private constructor has run in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.get()
    }

    /// State of the backing holder slot.
    pub fn snapshot() -> HolderSnapshot {
        INSTANCE.snapshot()
    }

    /// Construction number of this instance (1 for the first one built).
    pub fn generation(&self) -> usize {
        self.generation
    }
}
