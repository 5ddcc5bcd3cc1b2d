//! # singleton
//!
//! Lazily-initialised process-wide singletons.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sg-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use singleton::fixtures::Singleton;
//!
//! let a = Singleton::get_instance();
//! let b = Singleton::get_instance();
//! assert!(std::ptr::eq(a, b));
//! assert_eq!(Singleton::constructions(), 1);
//! ```
//!
//! ## Declaring your own
//!
//! ```rust
//! use singleton::core::define_singleton;
//!
//! pub struct Registry { _private: () }
//! define_singleton!(impl Registry => Registry { _private: () });
//!
//! assert!(std::ptr::eq(Registry::get_instance(), Registry::get_instance()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Holder slots, counters, and error definitions.
pub use sg_core as core;

/// `Singleton` and `RacySingleton` fixtures.
pub use sg_fixtures as fixtures;

pub use sg_core::{Error, HolderSnapshot, HolderState, OnceHolder, RacyHolder, Result};
pub use sg_fixtures::{RacySingleton, Singleton};
