//! Singleton declaration macros.
//!
//! Two shapes are supported by [`define_singleton!`]:
//!
//! * `define_singleton!(NAME, Type, init)` declares a `LazyLock` static.
//!   Access goes through `Deref`, there is no counter or state query.
//! * `define_singleton!(impl Type => init)` adds a `get_instance()`
//!   associated function to `Type`, backed by a private
//!   [`OnceHolder`](crate::holder::OnceHolder) static named after the type.
//!   Combined with a private constructor this is the full lazy singleton
//!   pattern: the accessor is the only way to reach an instance.

/// Re-export `LazyLock` for the static form of [`define_singleton!`].
pub use std::sync::LazyLock;

/// Define a lazily-initialised singleton.
///
/// # Static form
/// ```
/// use sg_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(REGISTRY, Registry, Registry { data: Vec::new() });
///
/// assert!(REGISTRY.data.is_empty());
/// ```
///
/// # Accessor form
/// ```
/// use sg_core::define_singleton;
///
/// pub struct Clock { _private: () }
/// define_singleton!(impl Clock => Clock { _private: () });
///
/// assert!(std::ptr::eq(Clock::get_instance(), Clock::get_instance()));
/// assert_eq!(Clock::holder().constructions(), 1);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        pub static $name: $crate::patterns::singleton::LazyLock<$ty> =
            $crate::patterns::singleton::LazyLock::new(|| $init);
    };
    (impl $ty:ty => $init:expr) => {
        impl $ty {
            /// Return the process-wide instance, constructing it on first call.
            pub fn get_instance() -> &'static $ty {
                Self::holder().get_or_init(|| $init)
            }

            /// The holder slot backing [`get_instance`](Self::get_instance).
            pub fn holder() -> &'static $crate::holder::OnceHolder<$ty> {
                static HOLDER: $crate::holder::OnceHolder<$ty> =
                    $crate::holder::OnceHolder::new(stringify!($ty));
                &HOLDER
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::state::HolderState;

    pub struct Catalog {
        entries: Vec<&'static str>,
    }

    crate::define_singleton!(CATALOG, Catalog, Catalog { entries: vec!["a"] });

    #[test]
    fn static_form_derefs_to_value() {
        assert_eq!(CATALOG.entries, vec!["a"]);
        assert!(std::ptr::eq(&*CATALOG, &*CATALOG));
    }

    pub struct Gauge {
        reading: u8,
    }

    crate::define_singleton!(impl Gauge => Gauge { reading: 42 });

    #[test]
    fn accessor_form_returns_one_instance() {
        let a = Gauge::get_instance();
        let b = Gauge::get_instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.reading, 42);
        assert_eq!(Gauge::holder().state(), HolderState::Populated);
        assert_eq!(Gauge::holder().constructions(), 1);
        assert_eq!(Gauge::holder().name(), "Gauge");
    }
}
