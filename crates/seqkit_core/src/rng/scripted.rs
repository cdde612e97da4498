//! Scripted random source for deterministic tests.

use std::num::NonZeroUsize;

use super::RandomSource;

/// Random source that replays a fixed list of draws.
///
/// Each call returns the next scripted value reduced modulo the requested
/// bound, cycling back to the start when the script runs out. An empty
/// script always draws `0`.
///
/// Useful when a test needs to pin the exact offsets a sampler or shuffler
/// receives rather than rely on a particular PRNG stream.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use seqkit_core::rng::{RandomSource, ScriptedSource};
///
/// let mut rng = ScriptedSource::new(vec![3, 7]);
/// let ten = NonZeroUsize::new(10).unwrap();
/// let five = NonZeroUsize::new(5).unwrap();
///
/// assert_eq!(rng.next_index(ten), 3);
/// assert_eq!(rng.next_index(five), 2); // 7 % 5
/// assert_eq!(rng.next_index(ten), 3); // cycles
/// assert_eq!(rng.draws(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedSource {
    script: Vec<usize>,
    position: usize,
    draws: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `script`.
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            position: 0,
            draws: 0,
        }
    }

    /// Number of draws taken since construction or the last reset.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Rewinds the script to its first value.
    pub fn reset(&mut self) {
        self.position = 0;
        self.draws = 0;
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: NonZeroUsize) -> usize {
        self.draws += 1;
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.position];
        self.position = (self.position + 1) % self.script.len();
        value % bound.get()
    }
}
