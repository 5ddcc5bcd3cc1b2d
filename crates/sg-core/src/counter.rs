//! Atomic construction counter.
//!
//! Holders bump a [`ConstructionCounter`] every time they run an
//! initialiser to completion. Fixtures also keep one inside their private
//! constructor, so tests can observe exactly how many instances were ever
//! built.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Monotonic counter of constructed instances.
#[derive(Debug, Default)]
pub struct ConstructionCounter {
    count: AtomicUsize,
}

impl ConstructionCounter {
    /// Create a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Record one construction and return the new total.
    pub fn record(&self) -> usize {
        self.count.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Number of constructions recorded so far.
    pub fn get(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        let counter = ConstructionCounter::new();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn record_returns_running_total() {
        let counter = ConstructionCounter::new();
        assert_eq!(counter.record(), 1);
        assert_eq!(counter.record(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let counter = Arc::new(ConstructionCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.record();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(counter.get(), 8000);
    }
}
