//! # sg-fixtures
//!
//! Singleton fixtures: types with a module-private constructor whose only
//! public entry point is a static `get_instance()` accessor.
//!
//! * [`Singleton`] is the production-quality rendition: one instance per
//!   process, whatever the contention on the first call.
//! * [`RacySingleton`] keeps the unsynchronised check-then-act of the
//!   classic pattern, so concurrent first callers may each build an
//!   instance.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The racy check-then-act fixture.
pub mod racy_singleton;

/// The once-only fixture.
pub mod singleton;

pub use racy_singleton::RacySingleton;
pub use singleton::Singleton;
