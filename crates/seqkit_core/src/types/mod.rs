//! Shared types for sequence operations.
//!
//! This module provides:
//! - `error`: Structured error type shared by every seqkit operation
//!
//! # Re-exports
//!
//! [`SeqError`] and the [`SeqResult`] alias are re-exported at this level.

pub mod error;

pub use error::{SeqError, SeqResult};
