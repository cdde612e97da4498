//! Timed pattern passes.
//!
//! A [`PatternPass`] is one compiled regular expression with its
//! replacement text. Running it measures the elapsed time and fails with
//! [`SeqError::PatternTimeout`] when the pass overruns its ceiling, so a
//! pipeline never hands back output that arrived late.

use std::time::{Duration, Instant};

use regex::Regex;
use seqkit_core::types::{SeqError, SeqResult};

/// A named, compiled replace-all pass.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use seqkit_text::pattern::PatternPass;
///
/// let pass = PatternPass::new("digits", r"\d+", "#").unwrap();
/// let out = pass.apply("a1b22c333", Duration::from_millis(100)).unwrap();
/// assert_eq!(out, "a#b#c#");
/// ```
#[derive(Debug, Clone)]
pub struct PatternPass {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

impl PatternPass {
    /// Compiles `pattern` into a pass that replaces every match with
    /// `replacement` (taken literally, no capture expansion).
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            replacement,
        })
    }

    /// Name reported in timeout errors and logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces every match in `input`, failing if the pass takes longer
    /// than `ceiling`.
    pub fn apply(&self, input: &str, ceiling: Duration) -> SeqResult<String> {
        let started = Instant::now();
        let output = self
            .regex
            .replace_all(input, regex::NoExpand(self.replacement))
            .into_owned();
        let elapsed = started.elapsed();
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

        if elapsed > ceiling {
            let limit_ms = u64::try_from(ceiling.as_millis()).unwrap_or(u64::MAX);
            tracing::warn!(
                pass = self.name,
                elapsed_us,
                limit_ms,
                input_len = input.len(),
                "pattern pass exceeded its ceiling"
            );
            return Err(SeqError::PatternTimeout {
                pass: self.name,
                limit_ms,
            });
        }

        tracing::trace!(
            pass = self.name,
            elapsed_us,
            "pattern pass completed"
        );
        Ok(output)
    }
}
