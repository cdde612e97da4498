//! Breadth-style recursive expansion.

use std::iter::FusedIterator;

/// Repeatedly expands items with `selector`, yielding every round in order.
///
/// Round 0 is `source` itself. Round `n + 1` is `selector` applied to each
/// item of round `n`, concatenated in the order those items appeared. The
/// iterator ends once a round comes out empty.
///
/// This ordering differs from depth-first [`flatten`](super::flatten): all
/// items of one round are produced before any item of the next.
///
/// Expansion is lazy and never recurses. Only the round being built is
/// buffered. A selector that never returns an empty expansion produces an
/// endless iterator; bound it with `take` if the input can cycle.
///
/// # Examples
///
/// ```
/// use seqkit_core::seq::expand_recursive;
///
/// // A tiny directory tree: each name expands to its children
/// let children = |name: &&str| -> Vec<&'static str> {
///     match *name {
///         "root" => vec!["a", "b"],
///         "a" => vec!["a1", "a2"],
///         "b" => vec!["b1"],
///         _ => vec![],
///     }
/// };
///
/// let order: Vec<&str> = expand_recursive(vec!["root"], children).collect();
/// assert_eq!(order, vec!["root", "a", "b", "a1", "a2", "b1"]);
/// ```
pub fn expand_recursive<I, F, E>(source: I, selector: F) -> ExpandRecursive<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> E,
    E: IntoIterator<Item = I::Item>,
{
    ExpandRecursive {
        source: Some(source.into_iter()),
        current: Vec::new().into_iter(),
        next_round: Vec::new(),
        selector,
        round: 0,
    }
}

/// Iterator returned by [`expand_recursive`].
pub struct ExpandRecursive<S: Iterator, F> {
    /// Round 0, drained lazily; `None` once exhausted.
    source: Option<S>,
    /// Items of the round currently being yielded (rounds >= 1).
    current: std::vec::IntoIter<S::Item>,
    /// Expansions collected for the following round.
    next_round: Vec<S::Item>,
    selector: F,
    round: usize,
}

impl<S: Iterator, F> ExpandRecursive<S, F> {
    /// Round of the most recently yielded item (`0` for source items).
    pub fn round(&self) -> usize {
        self.round
    }

    fn advance_round(&mut self) -> bool {
        if self.next_round.is_empty() {
            return false;
        }
        self.current = std::mem::take(&mut self.next_round).into_iter();
        self.round += 1;
        tracing::trace!(
            round = self.round,
            size = self.current.len(),
            "expanding next round"
        );
        true
    }
}

impl<S, F, E> Iterator for ExpandRecursive<S, F>
where
    S: Iterator,
    F: FnMut(&S::Item) -> E,
    E: IntoIterator<Item = S::Item>,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = match self.source.as_mut() {
                Some(source) => match source.next() {
                    Some(item) => item,
                    None => {
                        self.source = None;
                        if !self.advance_round() {
                            return None;
                        }
                        continue;
                    }
                },
                None => match self.current.next() {
                    Some(item) => item,
                    None => {
                        if !self.advance_round() {
                            return None;
                        }
                        continue;
                    }
                },
            };

            self.next_round.extend((self.selector)(&item));
            return Some(item);
        }
    }
}

impl<S, F, E> FusedIterator for ExpandRecursive<S, F>
where
    S: Iterator,
    F: FnMut(&S::Item) -> E,
    E: IntoIterator<Item = S::Item>,
{
}
