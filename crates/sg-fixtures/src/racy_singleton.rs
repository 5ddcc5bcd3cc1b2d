//! `RacySingleton`: the check-then-act lazy singleton, race included.
//!
//! Sequential callers always share one instance. Concurrent first callers
//! may each observe the slot empty and build their own instance; the last
//! write to the slot wins and earlier racers may keep an instance the slot
//! no longer references. After the racers drain the slot is stable.
//!
//! The constructor is private to this module:
//!
//! ```compile_fail,E0451
//! let s = sg_fixtures::RacySingleton { generation: 1 };
//! ```
//!
//! ```compile_fail,E0624
//! let s = sg_fixtures::RacySingleton::new();
//! ```

use std::sync::Arc;

use sg_core::{ConstructionCounter, HolderSnapshot, RacyHolder};
use tracing::trace;

static INSTANCE: RacyHolder<RacySingleton> = RacyHolder::new("RacySingleton");
static CONSTRUCTIONS: ConstructionCounter = ConstructionCounter::new();

/// Process-wide instance whose lazy initialisation is not atomic.
#[derive(Debug)]
pub struct RacySingleton {
    generation: usize,
}

impl RacySingleton {
    fn new() -> Self {
        let generation = CONSTRUCTIONS.record();
        trace!(generation, "constructing RacySingleton");
        Self { generation }
    }

    /// Return the instance in the slot, constructing one if the slot looked
    /// empty.
    pub fn get_instance() -> Arc<RacySingleton> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{mpsc, Barrier};
    use std::thread;

    // The only test in this binary that touches the `RacySingleton` slot.
    #[test]
    fn racing_first_callers_each_build_an_instance() {
        let inside_init = Arc::new(Barrier::new(2));
        let (first_done_tx, first_done_rx) = mpsc::channel::<()>();

        let first = {
            let inside_init = Arc::clone(&inside_init);
            thread::spawn(move || {
                let value = INSTANCE.get_or_init(|| {
                    inside_init.wait();
                    RacySingleton::new()
                });
                first_done_tx.send(()).unwrap();
                value
            })
        };
        let second = {
            let inside_init = Arc::clone(&inside_init);
            thread::spawn(move || {
                INSTANCE.get_or_init(|| {
                    inside_init.wait();
                    first_done_rx.recv().unwrap();
                    RacySingleton::new()
                })
            })
        };

        let first = first.join().unwrap();
        let second = second.join().unwrap();

        assert_eq!(RacySingleton::constructions(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        let mut generations = [first.generation(), second.generation()];
        generations.sort_unstable();
        assert_eq!(generations, [1, 2]);

        // The second write won; the public accessor sees it from now on.
        for _ in 0..3 {
            assert!(Arc::ptr_eq(&second, &RacySingleton::get_instance()));
        }
        assert_eq!(RacySingleton::constructions(), 2);
        assert_eq!(RacySingleton::snapshot().constructions, 2);
    }
}
