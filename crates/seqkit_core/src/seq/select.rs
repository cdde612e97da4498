//! Element selection and copying helpers.

use std::num::NonZeroUsize;

use crate::rng::RandomSource;
use crate::types::{SeqError, SeqResult};

/// Picks one element uniformly at random.
///
/// # Errors
///
/// Returns [`SeqError::EmptyCollection`] when `items` is empty.
///
/// # Examples
///
/// ```
/// use seqkit_core::rng::ScriptedSource;
/// use seqkit_core::seq::random_element;
///
/// let mut rng = ScriptedSource::new(vec![2]);
/// assert_eq!(random_element(&['a', 'b', 'c'], &mut rng), Ok(&'c'));
///
/// let empty: [char; 0] = [];
/// assert!(random_element(&empty, &mut rng).is_err());
/// ```
pub fn random_element<'a, T, R>(items: &'a [T], rng: &mut R) -> SeqResult<&'a T>
where
    R: RandomSource + ?Sized,
{
    let bound =
        NonZeroUsize::new(items.len()).ok_or(SeqError::EmptyCollection { need: 1, got: 0 })?;
    Ok(&items[rng.next_index(bound)])
}

/// Returns the element at index `len / 2`.
///
/// A middle is only meaningful with something on either side of it, so at
/// least three elements are required.
///
/// # Errors
///
/// Returns [`SeqError::EmptyCollection`] with `need: 3` for shorter input.
///
/// # Examples
///
/// ```
/// use seqkit_core::seq::middle_element;
///
/// assert_eq!(middle_element(&[1, 2, 3]), Ok(&2));
/// assert_eq!(middle_element(&[1, 2, 3, 4]), Ok(&3));
/// assert!(middle_element(&[1, 2]).is_err());
/// ```
pub fn middle_element<T>(items: &[T]) -> SeqResult<&T> {
    SeqError::require_len(3, items.len())?;
    Ok(&items[items.len() / 2])
}

/// Produces an independent copy of every element.
///
/// The capability to copy is a compile-time `Clone` bound rather than a
/// runtime check.
pub fn clone_all<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}
