//! Enumerable variant sets and enum randomisation.

use crate::rng::RandomSource;
use crate::seq::random_element;
use crate::types::SeqResult;

/// A type whose values form a fixed, listable set.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::SeededSource;
/// use seqkit_core::traits::{random_variant, Variants};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// impl Variants for Suit {
///     const ALL: &'static [Self] = &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
/// }
///
/// let mut rng = SeededSource::from_seed(52);
/// let suit: Suit = random_variant(&mut rng).unwrap();
/// assert!(Suit::ALL.contains(&suit));
/// ```
pub trait Variants: Copy + 'static {
    /// Every value of the type, in declaration order.
    const ALL: &'static [Self];

    /// Number of values.
    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Picks one value of `E` uniformly at random.
///
/// # Errors
///
/// Returns [`SeqError::EmptyCollection`](crate::types::SeqError::EmptyCollection)
/// when `E::ALL` is empty.
pub fn random_variant<E, R>(rng: &mut R) -> SeqResult<E>
where
    E: Variants,
    R: RandomSource + ?Sized,
{
    random_element(E::ALL, rng).copied()
}
