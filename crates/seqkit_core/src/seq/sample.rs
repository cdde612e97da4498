//! Offset-and-sort sampling without replacement.
//!
//! The construction draws `k` offsets from `[0, len - k]`, sorts them and
//! adds each offset's rank. Selected indices are therefore strictly
//! increasing with no rejection loop. The resulting subsets are not
//! uniform over all C(len, k) choices: evenly spaced selections are
//! favoured. Callers rely on that spacing, so it is kept as is.

use std::num::NonZeroUsize;

use crate::rng::RandomSource;
use crate::types::{SeqError, SeqResult};

/// Draws `k` strictly increasing indices into a sequence of length `len`.
///
/// `k` is clamped to `len`. `k == 0` returns an empty vector without
/// drawing. When `k >= len` every offset is drawn from a single-value range,
/// so the result is `0..len`.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::ScriptedSource;
/// use seqkit_core::seq::sample_indices;
///
/// // len = 5, k = 2: offsets drawn from [0, 4), sorted, then spaced by rank
/// let mut rng = ScriptedSource::new(vec![3, 1]);
/// assert_eq!(sample_indices(5, 2, &mut rng), vec![1, 4]);
///
/// let mut rng = ScriptedSource::new(vec![9]);
/// assert_eq!(sample_indices(3, 10, &mut rng), vec![0, 1, 2]);
/// ```
pub fn sample_indices<R>(len: usize, k: usize, rng: &mut R) -> Vec<usize>
where
    R: RandomSource + ?Sized,
{
    let k = k.min(len);
    if k == 0 {
        return Vec::new();
    }

    let span = NonZeroUsize::MIN.saturating_add(len - k);
    let mut offsets: Vec<usize> = (0..k).map(|_| rng.next_index(span)).collect();
    offsets.sort_unstable();
    for (rank, offset) in offsets.iter_mut().enumerate() {
        *offset += rank;
    }

    tracing::trace!(len, k, "drew sample indices");
    offsets
}

/// Selects up to `k` elements without replacement, preserving source order.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::SeededSource;
/// use seqkit_core::seq::sample;
///
/// let gods = ["zeus", "thor", "loki", "atenea", "gaia"];
///
/// let first = sample(&gods, 2, &mut SeededSource::from_seed(11));
/// let again = sample(&gods, 2, &mut SeededSource::from_seed(11));
/// assert_eq!(first, again);
///
/// assert!(sample(&gods, 0, &mut SeededSource::from_seed(11)).is_empty());
/// assert_eq!(sample(&gods, 9, &mut SeededSource::from_seed(11)), gods.to_vec());
/// ```
pub fn sample<T, R>(items: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    sample_indices(items.len(), k, rng)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// Borrowing variant of [`sample`].
pub fn sample_refs<'a, T, R>(items: &'a [T], k: usize, rng: &mut R) -> Vec<&'a T>
where
    R: RandomSource + ?Sized,
{
    sample_indices(items.len(), k, rng)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Strict variant of [`sample`] that refuses to clamp.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] when `k` exceeds the number of
/// elements. Nothing is drawn in that case.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::SeededSource;
/// use seqkit_core::seq::try_sample;
///
/// let mut rng = SeededSource::from_seed(5);
/// assert_eq!(try_sample(&[1, 2, 3], 3, &mut rng).unwrap(), vec![1, 2, 3]);
/// assert!(try_sample(&[1, 2, 3], 4, &mut rng).is_err());
/// ```
pub fn try_sample<T, R>(items: &[T], k: usize, rng: &mut R) -> SeqResult<Vec<T>>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    if k > items.len() {
        return Err(SeqError::invalid_argument(format!(
            "cannot sample {} elements from a sequence of {}",
            k,
            items.len()
        )));
    }
    Ok(sample(items, k, rng))
}
