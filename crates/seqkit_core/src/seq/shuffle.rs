//! Fisher–Yates shuffling.

use std::num::NonZeroUsize;

use crate::rng::RandomSource;

/// Shuffles `items` in place into a uniformly random permutation.
///
/// Runs the Fisher–Yates algorithm: for `i` from `len - 1` down to `1`,
/// draws `j` from `[0, i + 1)` and swaps positions `i` and `j`. Every
/// permutation of the original multiset is equally likely given a uniform
/// source. Only swaps are performed; no auxiliary buffer is allocated.
///
/// Sequences of length 0 or 1 are left untouched and consume no draws.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::SeededSource;
/// use seqkit_core::seq::shuffle;
///
/// let mut a = [1, 2, 3, 4, 5];
/// let mut b = [1, 2, 3, 4, 5];
/// shuffle(&mut a, &mut SeededSource::from_seed(2024));
/// shuffle(&mut b, &mut SeededSource::from_seed(2024));
///
/// // A freshly seeded source reproduces the permutation exactly
/// assert_eq!(a, b);
/// ```
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for i in (1..len).rev() {
        // i + 1 >= 2, so the bound is never zero
        let j = rng.next_index(NonZeroUsize::MIN.saturating_add(i));
        items.swap(i, j);
    }

    tracing::trace!(len, "shuffled sequence in place");
}

/// Collects `items` into a new vector and shuffles it.
///
/// The copying counterpart of [`shuffle`] for sources that are only
/// iterable.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::SeededSource;
/// use seqkit_core::seq::shuffled;
///
/// let mut rng = SeededSource::from_seed(8);
/// let mut deck = shuffled(1..=10, &mut rng);
/// deck.sort();
/// assert_eq!(deck, (1..=10).collect::<Vec<_>>());
/// ```
pub fn shuffled<I, R>(items: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    let mut buffer: Vec<I::Item> = items.into_iter().collect();
    shuffle(&mut buffer, rng);
    buffer
}
