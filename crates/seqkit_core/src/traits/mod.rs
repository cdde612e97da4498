//! Capability traits for sequence operations.
//!
//! This module defines:
//! - [`Variants`]: A closed, enumerable set of values (typically a fieldless enum)
//! - [`random_variant`]: Uniform pick over a [`Variants`] type
//!
//! Capabilities are compile-time bounds; nothing here is checked at runtime
//! beyond the emptiness of a variant table.

mod variants;

pub use variants::{random_variant, Variants};
