//! Lazy flattening of arbitrarily nested sequences.
//!
//! Traversal keeps an explicit stack of child iterators, so nesting depth
//! is bounded by heap memory rather than by the call stack.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ptr;

/// A value that is either a leaf element or a sequence of further values.
///
/// # Examples
///
/// ```
/// use seqkit_core::seq::Nested;
///
/// let tree: Nested<i32> = Nested::Seq(vec![
///     Nested::Leaf(1),
///     Nested::Seq(vec![Nested::Leaf(2), Nested::Leaf(3)]),
/// ]);
///
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.leaf_count(), 3);
/// assert_eq!(tree.iter_flat().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
///
/// Dropping, cloning, comparing, hashing and formatting all walk the
/// structure with a heap-allocated work stack, so none of them is limited
/// by nesting depth.
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A sequence of nested values.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` for [`Nested::Leaf`].
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Builds a one-level sequence from plain elements.
    ///
    /// ```
    /// use seqkit_core::seq::Nested;
    ///
    /// let flat = Nested::from_leaves(["a", "b"]);
    /// assert_eq!(flat, Nested::Seq(vec![Nested::Leaf("a"), Nested::Leaf("b")]));
    /// ```
    pub fn from_leaves<I: IntoIterator<Item = T>>(items: I) -> Self {
        Nested::Seq(items.into_iter().map(Nested::Leaf).collect())
    }

    /// Lazily yields every leaf by reference, depth-first and left to right.
    pub fn iter_flat(&self) -> Flatten<'_, T> {
        flatten(std::slice::from_ref(self))
    }

    /// Lazily yields every leaf by value, consuming the structure.
    pub fn into_flat(self) -> IntoFlatten<T> {
        IntoFlatten {
            stack: vec![vec![self].into_iter()],
        }
    }

    /// Maximum nesting level: `0` for a leaf, `1` for a flat sequence.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];

        while let Some((node, level)) = pending.pop() {
            match node {
                Nested::Leaf(_) => deepest = deepest.max(level),
                Nested::Seq(children) => {
                    let level = level + 1;
                    deepest = deepest.max(level);
                    pending.extend(children.iter().map(|child| (child, level)));
                }
            }
        }
        deepest
    }

    /// Number of leaves across all levels.
    pub fn leaf_count(&self) -> usize {
        self.iter_flat().count()
    }

    /// Moves the payload out without running the iterative drop.
    fn into_inner(self) -> Result<T, Vec<Nested<T>>> {
        let this = ManuallyDrop::new(self);
        // Safety: `this` is never dropped, so the payload read here has a single owner.
        match &*this {
            Nested::Leaf(value) => Ok(unsafe { ptr::read(value) }),
            Nested::Seq(children) => Err(unsafe { ptr::read(children) }),
        }
    }
}

impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let Nested::Seq(children) = self else {
            return;
        };
        let mut pending = mem::take(children);
        while let Some(mut node) = pending.pop() {
            // Each popped node is left childless, so its own drop is shallow
            if let Nested::Seq(children) = &mut node {
                pending.append(children);
            }
        }
    }
}

impl<T: Clone> Clone for Nested<T> {
    fn clone(&self) -> Self {
        let children = match self {
            Nested::Leaf(value) => return Nested::Leaf(value.clone()),
            Nested::Seq(children) => children,
        };

        let mut frames = vec![(children.iter(), Vec::with_capacity(children.len()))];
        while let Some((source, built)) = frames.last_mut() {
            match source.next() {
                Some(Nested::Leaf(value)) => built.push(Nested::Leaf(value.clone())),
                Some(Nested::Seq(children)) => {
                    frames.push((children.iter(), Vec::with_capacity(children.len())));
                }
                None => {
                    let finished = frames.pop().map(|(_, built)| Nested::Seq(built));
                    match (frames.last_mut(), finished) {
                        (Some((_, parent)), Some(node)) => parent.push(node),
                        (None, Some(node)) => return node,
                        _ => {}
                    }
                }
            }
        }
        Nested::Seq(Vec::new())
    }
}

impl<T: PartialEq> PartialEq for Nested<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Nested::Leaf(a), Nested::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Nested::Seq(a), Nested::Seq(b)) => {
                    if a.len() != b.len() {
                        return false;
                    }
                    pending.extend(a.iter().zip(b));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Nested<T> {}

impl<T: Hash> Hash for Nested<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Nested::Leaf(value) => {
                    state.write_u8(0);
                    value.hash(state);
                }
                Nested::Seq(children) => {
                    state.write_u8(1);
                    state.write_usize(children.len());
                    pending.extend(children.iter().rev());
                }
            }
        }
    }
}

enum DebugStep<'a, T> {
    Node(&'a Nested<T>),
    Text(&'static str),
}

impl<T: fmt::Debug> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![DebugStep::Node(self)];
        while let Some(step) = pending.pop() {
            match step {
                DebugStep::Text(text) => f.write_str(text)?,
                DebugStep::Node(Nested::Leaf(value)) => {
                    f.write_str("Leaf(")?;
                    fmt::Debug::fmt(value, f)?;
                    f.write_str(")")?;
                }
                DebugStep::Node(Nested::Seq(children)) => {
                    f.write_str("Seq([")?;
                    pending.push(DebugStep::Text("])"));
                    for (i, child) in children.iter().enumerate().rev() {
                        pending.push(DebugStep::Node(child));
                        if i > 0 {
                            pending.push(DebugStep::Text(", "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Nested::Seq(children)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().collect())
    }
}

/// Flattens a slice of nested values into a lazy iterator of leaves.
///
/// Leaves are yielded as-is; sequences are expanded depth-first, left to
/// right, preserving the original order. Calling again on the same input
/// yields the same sequence.
///
/// # Examples
///
/// ```
/// use seqkit_core::seq::{flatten, Nested};
///
/// let input = vec![
///     Nested::Seq(vec![Nested::Leaf('a'), Nested::Seq(vec![])]),
///     Nested::Leaf('b'),
///     Nested::Seq(vec![Nested::Seq(vec![Nested::Leaf('c')])]),
/// ];
///
/// let once: String = flatten(&input).collect();
/// let twice: String = flatten(&input).collect();
/// assert_eq!(once, "abc");
/// assert_eq!(once, twice);
/// ```
pub fn flatten<T>(items: &[Nested<T>]) -> Flatten<'_, T> {
    Flatten {
        stack: vec![items.iter()],
    }
}

/// Borrowing flatten iterator. See [`flatten`].
#[derive(Debug)]
pub struct Flatten<'a, T> {
    stack: Vec<std::slice::Iter<'a, Nested<T>>>,
}

impl<T> Clone for Flatten<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Flatten<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Nested::Leaf(value)) => return Some(value),
                Some(Nested::Seq(children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for Flatten<'_, T> {}

/// Owning flatten iterator. See [`Nested::into_flat`].
#[derive(Debug)]
pub struct IntoFlatten<T> {
    stack: Vec<std::vec::IntoIter<Nested<T>>>,
}

impl<T> Iterator for IntoFlatten<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next().map(Nested::into_inner) {
                Some(Ok(value)) => return Some(value),
                Some(Err(children)) => self.stack.push(children.into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for IntoFlatten<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leaf(v: i32) -> Nested<i32> {
        Nested::Leaf(v)
    }

    fn seq(children: Vec<Nested<i32>>) -> Nested<i32> {
        Nested::Seq(children)
    }

    #[test]
    fn test_flatten_empty() {
        let empty: Vec<Nested<i32>> = Vec::new();
        assert_eq!(flatten(&empty).count(), 0);

        let hollow = vec![seq(vec![]), seq(vec![seq(vec![])])];
        assert_eq!(flatten(&hollow).count(), 0);
    }

    #[test]
    fn test_flatten_depth_first_order() {
        let input = vec![
            leaf(1),
            seq(vec![leaf(2), seq(vec![leaf(3), leaf(4)]), leaf(5)]),
            seq(vec![seq(vec![seq(vec![leaf(6)])])]),
            leaf(7),
        ];
        let flat: Vec<i32> = flatten(&input).copied().collect();
        assert_eq!(flat, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_flatten_already_flat_is_noop() {
        let input: Vec<Nested<i32>> = (0..10).map(leaf).collect();
        let flat: Vec<i32> = flatten(&input).copied().collect();
        assert_eq!(flat, (0..10).collect::<Vec<_>>());

        // Re-wrapping the output and flattening again changes nothing
        let rewrapped: Vec<Nested<i32>> = flat.iter().copied().map(leaf).collect();
        let again: Vec<i32> = flatten(&rewrapped).copied().collect();
        assert_eq!(again, flat);
    }

    #[test]
    fn test_flatten_is_lazy() {
        let input = vec![leaf(1), seq(vec![leaf(2), leaf(3)])];
        let mut iter = flatten(&input);
        assert_eq!(iter.next(), Some(&1));
        let rest = iter.clone();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(rest.copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_into_flat_matches_borrowed() {
        let tree = seq(vec![leaf(1), seq(vec![leaf(2)]), leaf(3)]);
        let borrowed: Vec<i32> = tree.iter_flat().copied().collect();
        let owned: Vec<i32> = tree.into_flat().collect();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_into_flat_moves_non_copy() {
        let tree = Nested::Seq(vec![
            Nested::Leaf(String::from("x")),
            Nested::Seq(vec![Nested::Leaf(String::from("y"))]),
        ]);
        let owned: Vec<String> = tree.into_flat().collect();
        assert_eq!(owned, vec!["x", "y"]);
    }

    #[test]
    fn test_depth_and_leaf_count() {
        assert_eq!(leaf(1).depth(), 0);
        assert_eq!(seq(vec![]).depth(), 1);
        assert_eq!(seq(vec![leaf(1), seq(vec![leaf(2)])]).depth(), 2);
        assert_eq!(seq(vec![leaf(1), seq(vec![leaf(2)])]).leaf_count(), 2);
    }

    #[test]
    fn test_from_conversions() {
        let collected: Nested<i32> = vec![leaf(1), leaf(2)].into_iter().collect();
        assert_eq!(collected, Nested::from(vec![leaf(1), leaf(2)]));
        assert_eq!(collected, Nested::from_leaves([1, 2]));
        assert!(!collected.is_leaf());
    }

    fn deep_tree(depth: usize) -> Nested<i32> {
        let mut tree = leaf(0);
        for i in 1..=depth as i32 {
            tree = seq(vec![leaf(i), tree]);
        }
        tree
    }

    fn hash_of(tree: &Nested<i32>) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        tree.hash(&mut hasher);
        hasher.finish()
    }

    const DEEP: usize = 200_000;

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let tree = deep_tree(DEEP);

        assert_eq!(tree.depth(), DEEP);
        assert_eq!(tree.iter_flat().count(), DEEP + 1);
        assert_eq!(tree.iter_flat().next(), Some(&(DEEP as i32)));

        let last = tree.into_flat().last();
        assert_eq!(last, Some(0));
    }

    #[test]
    fn test_deep_input_flattened_by_reference_then_dropped() {
        let input = vec![deep_tree(DEEP), leaf(-1)];
        assert_eq!(flatten(&input).count(), DEEP + 2);
        assert_eq!(flatten(&input).last(), Some(&-1));
        drop(input);
    }

    #[test]
    fn test_deep_partially_consumed_into_flat_drops() {
        let mut owned = deep_tree(DEEP).into_flat();
        assert_eq!(owned.next(), Some(DEEP as i32));
        assert_eq!(owned.next(), Some(DEEP as i32 - 1));
        drop(owned);
    }

    #[test]
    fn test_deep_clone_compare_and_hash() {
        let tree = deep_tree(DEEP);
        let copy = tree.clone();
        assert_eq!(copy.depth(), DEEP);
        assert!(copy == tree);
        assert_eq!(hash_of(&copy), hash_of(&tree));

        let other = deep_tree(DEEP - 1);
        assert!(other != tree);

        let rendered = format!("{:?}", tree);
        assert!(rendered.starts_with(&format!("Seq([Leaf({}), Seq([", DEEP)));
        assert!(rendered.ends_with("Leaf(0)])])"));
    }

    #[test]
    fn test_debug_format() {
        let tree = seq(vec![leaf(1), seq(vec![]), seq(vec![leaf(2), leaf(3)])]);
        assert_eq!(
            format!("{:?}", tree),
            "Seq([Leaf(1), Seq([]), Seq([Leaf(2), Leaf(3)])])"
        );
        assert_eq!(format!("{:?}", Nested::Leaf("a")), "Leaf(\"a\")");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_ne!(seq(vec![leaf(1)]), leaf(1));
        assert_ne!(seq(vec![leaf(1)]), seq(vec![seq(vec![leaf(1)])]));
        assert_ne!(seq(vec![leaf(1), leaf(2)]), seq(vec![leaf(1)]));
        assert_eq!(
            seq(vec![leaf(1), seq(vec![leaf(2)])]),
            seq(vec![leaf(1), seq(vec![leaf(2)])])
        );
        assert_ne!(
            hash_of(&seq(vec![leaf(1), seq(vec![leaf(2)])])),
            hash_of(&seq(vec![seq(vec![leaf(1)]), leaf(2)]))
        );
    }

    fn arb_nested() -> impl Strategy<Value = Nested<u16>> {
        let leaf = any::<u16>().prop_map(Nested::Leaf);
        leaf.prop_recursive(6, 128, 8, |inner| {
            proptest::collection::vec(inner, 0..8).prop_map(Nested::Seq)
        })
    }

    fn collect_recursive(node: &Nested<u16>, out: &mut Vec<u16>) {
        match node {
            Nested::Leaf(v) => out.push(*v),
            Nested::Seq(children) => children.iter().for_each(|c| collect_recursive(c, out)),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property test: the stack-based walk agrees with a naive recursive walk.
        #[test]
        fn prop_flatten_matches_recursive(tree in arb_nested()) {
            let mut expected = Vec::new();
            collect_recursive(&tree, &mut expected);

            let flat: Vec<u16> = tree.iter_flat().copied().collect();
            prop_assert_eq!(&flat, &expected);

            let copy = tree.clone();
            prop_assert_eq!(&copy, &tree);

            let owned: Vec<u16> = tree.into_flat().collect();
            prop_assert_eq!(owned, expected);
        }
    }
}
