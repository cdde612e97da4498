//! # seqkit_core: Sequence Utilities Foundation
//!
//! ## Foundation Layer Role
//!
//! seqkit_core is the bottom layer of the workspace, providing:
//! - Error types: `SeqError` (`types::error`)
//! - Injectable random sources: `RandomSource`, `SeededSource`, `ScriptedSource` (`rng`)
//! - In-place Fisher–Yates shuffling (`seq::shuffle`)
//! - Offset-and-sort sampling without replacement (`seq::sample`)
//! - Element selection helpers (`seq::select`)
//! - Lazy flattening of nested sequences and breadth-style expansion (`seq::nested`, `seq::expand`)
//! - Capability traits such as `Variants` for enum randomisation (`traits`)
//!
//! ## No Global State
//!
//! There is no process-wide random generator. Every operation that needs
//! randomness takes a `&mut impl RandomSource`, so fixed seeds reproduce
//! results exactly and each thread owns its own source.
//!
//! ## Usage Examples
//!
//! ```rust
//! use seqkit_core::rng::SeededSource;
//! use seqkit_core::seq::{sample, shuffle};
//!
//! let mut rng = SeededSource::from_seed(7);
//!
//! let mut values = [1, 2, 3, 4, 5];
//! shuffle(&mut values, &mut rng);
//! let mut sorted = values;
//! sorted.sort();
//! assert_eq!(sorted, [1, 2, 3, 4, 5]);
//!
//! let gods = ["zeus", "thor", "loki", "atenea", "gaia"];
//! let picked = sample(&gods, 2, &mut rng);
//! assert_eq!(picked.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod seq;
pub mod traits;
pub mod types;
