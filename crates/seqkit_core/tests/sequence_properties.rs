//! Integration tests for the documented behaviour of the sequence operations.
//!
//! Covers:
//! - Fixed-seed reproducibility of shuffling and sampling
//! - Sampling edge cases (k = 0, k >= len)
//! - Multiset preservation under shuffling
//! - Flattening order and expansion round order

use seqkit_core::rng::{RandomSource, ScriptedSource, SeededSource};
use seqkit_core::seq::{expand_recursive, flatten, sample, shuffle, Nested};

const GODS: [&str; 5] = ["zeus", "thor", "loki", "atenea", "gaia"];

#[test]
fn test_sample_scenario_reproducible() {
    let first = sample(&GODS, 2, &mut SeededSource::from_seed(42));
    let second = sample(&GODS, 2, &mut SeededSource::from_seed(42));

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_ne!(first[0], first[1]);
}

#[test]
fn test_shuffle_scenario_reproducible() {
    let run = |seed: u64| {
        let mut values = [1, 2, 3, 4, 5];
        shuffle(&mut values, &mut SeededSource::from_seed(seed));
        values
    };

    let reference = run(42);
    for _ in 0..5 {
        assert_eq!(run(42), reference);
    }

    let mut sorted = reference;
    sorted.sort();
    assert_eq!(sorted, [1, 2, 3, 4, 5]);
}

#[test]
fn test_shuffle_then_sample_share_one_source() {
    // One source threaded through several calls stays reproducible as a whole
    let run = || {
        let mut rng = SeededSource::from_seed(1234);
        let mut deck: Vec<u32> = (0..52).collect();
        shuffle(&mut deck, &mut rng);
        let hand = sample(&deck, 5, &mut rng);
        (deck, hand)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_sample_edge_cases() {
    let mut rng = SeededSource::from_seed(9);
    assert!(sample(&GODS, 0, &mut rng).is_empty());
    assert_eq!(sample(&GODS, GODS.len(), &mut rng), GODS.to_vec());
    assert_eq!(sample(&GODS, usize::MAX, &mut rng), GODS.to_vec());
}

#[test]
fn test_custom_source_plugs_in() {
    // A source that always returns the top of its range
    struct Greedy;

    impl RandomSource for Greedy {
        fn next_index(&mut self, bound: std::num::NonZeroUsize) -> usize {
            bound.get() - 1
        }
    }

    assert_eq!(sample(&GODS, 2, &mut Greedy), vec!["atenea", "gaia"]);

    let mut values = [1, 2, 3];
    shuffle(&mut values, &mut Greedy);
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn test_scripted_sample_exact() {
    let mut rng = ScriptedSource::new(vec![0, 3]);
    assert_eq!(sample(&GODS, 2, &mut rng), vec!["zeus", "gaia"]);
}

#[test]
fn test_flatten_and_expand_orderings() {
    // Same tree, two traversals
    let tree = vec![
        Nested::Seq(vec![Nested::Leaf("a1"), Nested::Leaf("a2")]),
        Nested::Seq(vec![Nested::Leaf("b1")]),
    ];
    let depth_first: Vec<&str> = flatten(&tree).copied().collect();
    assert_eq!(depth_first, vec!["a1", "a2", "b1"]);

    let children = |name: &&'static str| -> Vec<&'static str> {
        match *name {
            "root" => vec!["a", "b"],
            "a" => vec!["a1", "a2"],
            "b" => vec!["b1"],
            _ => vec![],
        }
    };
    let breadth: Vec<&str> = expand_recursive(["root"], children).collect();
    assert_eq!(breadth, vec!["root", "a", "b", "a1", "a2", "b1"]);
}
