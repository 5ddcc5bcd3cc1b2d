//! Holder lifecycle state and observable snapshots.
//!
//! A holder slot has exactly two states. It starts [`HolderState::Empty`]
//! and moves to [`HolderState::Populated`] on the first successful
//! initialisation; there is no transition back.

use std::fmt;

/// The two states of a holder slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolderState {
    /// No instance has been stored yet.
    #[default]
    Empty,
    /// The slot contains an instance. Terminal.
    Populated,
}

impl HolderState {
    /// Return `true` for [`HolderState::Populated`].
    pub fn is_populated(self) -> bool {
        matches!(self, Self::Populated)
    }
}

impl fmt::Display for HolderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Populated => write!(f, "populated"),
        }
    }
}

/// Point-in-time view of a holder, suitable for test reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolderSnapshot {
    /// Holder name.
    pub holder: &'static str,
    /// Slot state when the snapshot was taken.
    pub state: HolderState,
    /// Number of instances the holder has constructed so far.
    pub constructions: usize,
}

impl fmt::Display for HolderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} construction{})",
            self.holder,
            self.state,
            self.constructions,
            if self.constructions == 1 { "" } else { "s" }
        )
    }
}
