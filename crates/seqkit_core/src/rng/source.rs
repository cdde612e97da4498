//! The random draw contract.

use std::num::NonZeroUsize;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::types::{SeqError, SeqResult};

/// Source of uniformly distributed indices.
///
/// Implementors return an integer drawn uniformly from `[0, bound)`. The
/// only observable state is the next draw; two sources built from the same
/// seed must be interchangeable.
///
/// Sources are used through `&mut` and are not meant to be shared across
/// threads. Give each thread its own source.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use seqkit_core::rng::{RandomSource, SeededSource};
///
/// fn roll<R: RandomSource>(rng: &mut R) -> usize {
///     rng.next_index(NonZeroUsize::new(6).unwrap()) + 1
/// }
///
/// let mut rng = SeededSource::from_seed(3);
/// let value = roll(&mut rng);
/// assert!((1..=6).contains(&value));
/// ```
pub trait RandomSource {
    /// Draws an index uniformly from `[0, bound)`.
    fn next_index(&mut self, bound: NonZeroUsize) -> usize;

    /// Draws an index from `[0, bound)`, rejecting a zero bound.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] when `bound == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit_core::rng::{RandomSource, SeededSource};
    ///
    /// let mut rng = SeededSource::from_seed(1);
    /// assert!(rng.try_next_index(0).is_err());
    /// assert!(rng.try_next_index(4).unwrap() < 4);
    /// ```
    fn try_next_index(&mut self, bound: usize) -> SeqResult<usize> {
        let bound = NonZeroUsize::new(bound)
            .ok_or_else(|| SeqError::invalid_argument("draw bound must be positive"))?;
        Ok(self.next_index(bound))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        (**self).next_index(bound)
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        self.gen_range(0..bound.get())
    }
}

impl RandomSource for ThreadRng {
    #[inline]
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        self.gen_range(0..bound.get())
    }
}
