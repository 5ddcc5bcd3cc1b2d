//! Patterns sub-module: singleton declaration macros.

pub mod singleton;
