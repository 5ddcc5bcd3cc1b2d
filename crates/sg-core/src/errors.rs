//! Error types for singleton-rs.
//!
//! Holders never fail on the infallible path. Errors only appear when a
//! caller supplies a fallible initialiser or tries to seed a slot that is
//! already populated. The [`fail!`] macro is the shorthand for bailing out
//! of a fallible initialiser.

use thiserror::Error;

/// The top-level error type used throughout singleton-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fallible initialiser returned an error. The slot is left empty so
    /// that a later call may retry.
    #[error("construction of `{holder}` failed: {reason}")]
    ConstructionFailed {
        /// Name of the holder whose initialiser failed.
        holder: &'static str,
        /// Rendered error returned by the initialiser.
        reason: String,
    },

    /// [`set`](crate::holder::OnceHolder::set) was called on a holder that
    /// already contains an instance.
    #[error("holder `{holder}` is already populated")]
    AlreadyPopulated {
        /// Name of the holder.
        holder: &'static str,
    },
}

impl Error {
    /// Build a [`Error::ConstructionFailed`] from any displayable cause.
    pub fn construction_failed(holder: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::ConstructionFailed {
            holder,
            reason: reason.to_string(),
        }
    }

    /// Name of the holder this error refers to.
    pub fn holder(&self) -> &'static str {
        match self {
            Self::ConstructionFailed { holder, .. } | Self::AlreadyPopulated { holder } => holder,
        }
    }
}

/// Shorthand `Result` type used throughout singleton-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::ConstructionFailed { .. })` from a fallible initialiser.
///
/// # Example
/// ```
/// use sg_core::{fail, errors::Error};
///
/// fn open_pool(size: usize) -> sg_core::Result<Vec<u8>> {
///     if size == 0 {
///         fail!("pool", "size must be positive, got {size}");
///     }
///     Ok(vec![0; size])
/// }
///
/// assert!(open_pool(4).is_ok());
/// assert_eq!(open_pool(0).unwrap_err().holder(), "pool");
/// ```
#[macro_export]
macro_rules! fail {
    ($holder:expr, $($msg:tt)*) => {
        return Err($crate::errors::Error::ConstructionFailed {
            holder: $holder,
            reason: format!($($msg)*),
        })
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_failed_display() {
        let err = Error::construction_failed("registry", "disk full");
        assert_eq!(
            err.to_string(),
            "construction of `registry` failed: disk full"
        );
        assert_eq!(err.holder(), "registry");
    }

    #[test]
    fn already_populated_display() {
        let err = Error::AlreadyPopulated { holder: "registry" };
        assert_eq!(err.to_string(), "holder `registry` is already populated");
        assert_eq!(err.holder(), "registry");
    }

    #[test]
    fn fail_macro_returns_construction_failed() {
        fn build(n: i32) -> Result<i32> {
            if n < 0 {
                fail!("numbers", "negative input {n}");
            }
            Ok(n)
        }
        assert_eq!(build(3), Ok(3));
        assert_eq!(
            build(-1),
            Err(Error::ConstructionFailed {
                holder: "numbers",
                reason: "negative input -1".to_string(),
            })
        );
    }
}
