// src/collections/mod.rs

//! Collection algorithms.
//!
//! - [`dependent`] orders node lists so dependencies come first.
//! - [`cycle`] holds the breadth-first cycle probe used by the sort.
//! - [`flags`] packs enum values into 64-bit sets.
//! - [`error`] defines the error types for the above.

pub mod cycle;
pub mod dependent;
pub mod error;
pub mod flags;

pub use cycle::find_cycle;
pub use dependent::{DependentNode, SortPolicy, sort_dependencies, sort_dependencies_with};
pub use error::{FlagsError, SortError};
pub use flags::Ordinal;
