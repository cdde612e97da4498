//! # Random Source Infrastructure
//!
//! This module provides the injectable random sources consumed by the
//! shuffler, the sampler and the selection helpers.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Seeded sources replay identical draws for identical seeds
//! - **Injection**: Every randomised operation takes `&mut impl RandomSource`;
//!   there is no process-wide default generator
//! - **Type-level guards**: Draw bounds are `NonZeroUsize`, so an empty range
//!   cannot be requested by construction
//! - **Static dispatch**: Generic bounds only; no `Box<dyn RandomSource>` in hot paths
//!
//! ## Module Structure
//!
//! - [`RandomSource`]: The draw contract
//! - [`SeededSource`]: `rand::rngs::StdRng` wrapper with seed tracking
//! - [`ScriptedSource`]: Replays a fixed list of draws for deterministic tests
//!
//! ## Usage Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use seqkit_core::rng::{RandomSource, SeededSource};
//!
//! let mut rng = SeededSource::from_seed(12345);
//! let bound = NonZeroUsize::new(6).unwrap();
//! let roll = rng.next_index(bound);
//! assert!(roll < 6);
//!
//! // An entropy-seeded source still reports its seed for replay
//! let fresh = SeededSource::from_entropy();
//! let replay = SeededSource::from_seed(fresh.seed());
//! # let _ = replay;
//! ```

mod scripted;
mod seeded;
mod source;

// Public re-exports
pub use scripted::ScriptedSource;
pub use seeded::SeededSource;
pub use source::RandomSource;
