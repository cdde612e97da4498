//! Generic sequence operations.
//!
//! This module provides a collection of algorithms over slices and
//! iterators, split into randomised operations (which consume an injected
//! [`RandomSource`](crate::rng::RandomSource)) and pure structural ones.
//!
//! ## Randomised
//!
//! - [`shuffle`]: In-place Fisher–Yates permutation
//! - [`shuffled`]: Collect-then-shuffle convenience
//! - [`sample`], [`sample_refs`], [`sample_indices`]: Offset-and-sort sampling
//!   without replacement, preserving source order
//! - [`try_sample`]: Strict sampling that rejects oversized requests
//! - [`random_element`]: Single uniform pick
//!
//! ## Structural
//!
//! - [`Nested`], [`flatten`]: Lazy depth-first flattening of arbitrarily nested sequences
//! - [`expand_recursive`]: Breadth-style fixed-point expansion by rounds
//! - [`middle_element`], [`clone_all`]: Selection and copying helpers
//!
//! All traversals over nested or self-expanding structures run on explicit
//! stacks and buffers; none of them recurse on the call stack.
//!
//! ## Examples
//!
//! ```
//! use seqkit_core::rng::SeededSource;
//! use seqkit_core::seq::{expand_recursive, flatten, sample_indices, Nested};
//!
//! let tree = vec![
//!     Nested::Leaf(1),
//!     Nested::Seq(vec![Nested::Leaf(2), Nested::Seq(vec![Nested::Leaf(3)])]),
//! ];
//! let flat: Vec<i32> = flatten(&tree).copied().collect();
//! assert_eq!(flat, vec![1, 2, 3]);
//!
//! // Halve every even number until nothing is left to expand
//! let rounds: Vec<u32> =
//!     expand_recursive(vec![8u32], |&n| if n % 2 == 0 { vec![n / 2] } else { vec![] }).collect();
//! assert_eq!(rounds, vec![8, 4, 2, 1]);
//!
//! let mut rng = SeededSource::from_seed(1);
//! let picks = sample_indices(10, 3, &mut rng);
//! assert!(picks.windows(2).all(|w| w[0] < w[1]));
//! ```

mod expand;
mod nested;
mod sample;
mod select;
mod shuffle;

// Re-export public types at module level
pub use expand::{expand_recursive, ExpandRecursive};
pub use nested::{flatten, Flatten, IntoFlatten, Nested};
pub use sample::{sample, sample_indices, sample_refs, try_sample};
pub use select::{clone_all, middle_element, random_element};
pub use shuffle::{shuffle, shuffled};
