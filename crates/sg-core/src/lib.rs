//! # sg-core
//!
//! Holder slots, construction counters, and error definitions for
//! singleton-rs.
//!
//! A *holder* is a named process-wide slot that starts empty and is
//! populated by the first accessor call that finds it empty. Two flavours
//! are provided:
//!
//! * [`OnceHolder`] constructs exactly once, whatever the contention.
//! * [`RacyHolder`] performs an unsynchronised check-then-act and may
//!   construct several instances under concurrent first access.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Atomic construction counter.
pub mod counter;

/// Error types and the `fail!` macro.
pub mod errors;

/// Once-only holder slot.
pub mod holder;

/// Design patterns: singleton declaration macros.
pub mod patterns;

/// Check-then-act holder slot.
pub mod racy;

/// Holder lifecycle state and snapshots.
pub mod state;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use counter::ConstructionCounter;
pub use errors::{Error, Result};
pub use holder::OnceHolder;
pub use racy::RacyHolder;
pub use state::{HolderSnapshot, HolderState};
