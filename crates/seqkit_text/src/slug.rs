//! Slug generation.
//!
//! A slug is a lowercase ASCII token made of letters, digits and single
//! underscores, with no underscore at either end. The pipeline:
//!
//! 1. Empty input yields an empty slug.
//! 2. Non-ASCII code points are dropped, not transliterated.
//! 3. Each run of two or more whitespace/underscore characters, and each
//!    character that is not an ASCII letter or digit, becomes one space.
//! 4. Leading and trailing spaces are trimmed.
//! 5. Each remaining run of spaces becomes one underscore.
//! 6. The result is lowercased with ASCII (locale-independent) rules.
//!
//! Steps 3 and 5 are timed pattern passes.

use std::sync::OnceLock;
use std::time::Duration;

use crate::config::TextConfig;
use crate::error::{TextError, TextResult};
use crate::pattern::PatternPass;

const COLLAPSE_PATTERN: &str = r"[\s_]{2,}|[^A-Za-z0-9]";
const UNDERSCORE_PATTERN: &str = r" +";

/// Slug generator holding its compiled passes and ceiling.
///
/// # Examples
///
/// ```
/// use seqkit_text::{Slugifier, TextConfig};
///
/// let slugifier = Slugifier::new(TextConfig::default()).unwrap();
/// assert_eq!(slugifier.slugify("Extra   spaces").unwrap(), "extra_spaces");
/// assert_eq!(slugifier.slugify("¡Hola!").unwrap(), "hola");
/// assert_eq!(slugifier.slugify("").unwrap(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Slugifier {
    collapse: PatternPass,
    underscore: PatternPass,
    ceiling: Duration,
}

impl Slugifier {
    /// Compiles the slug passes with the ceiling from `config`.
    ///
    /// `config` is used as given; run [`TextConfig::validate`] first when it
    /// comes from an untrusted source.
    pub fn new(config: TextConfig) -> TextResult<Self> {
        Ok(Self {
            collapse: PatternPass::new("slug_collapse", COLLAPSE_PATTERN, " ")?,
            underscore: PatternPass::new("slug_underscore", UNDERSCORE_PATTERN, "_")?,
            ceiling: config.pattern_timeout(),
        })
    }

    /// Per-pass ceiling.
    pub fn ceiling(&self) -> Duration {
        self.ceiling
    }

    /// Converts `text` into a slug.
    ///
    /// # Errors
    ///
    /// Returns a timeout error when either pattern pass overruns the ceiling.
    pub fn slugify(&self, text: &str) -> TextResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let ascii: String = text.chars().filter(char::is_ascii).collect();
        let spaced = self.collapse.apply(&ascii, self.ceiling)?;
        let joined = self.underscore.apply(spaced.trim_matches(' '), self.ceiling)?;
        let slug = joined.to_ascii_lowercase();

        tracing::trace!(input_len = text.len(), slug_len = slug.len(), "slugified text");
        Ok(slug)
    }
}

fn default_slugifier() -> TextResult<&'static Slugifier> {
    static DEFAULT: OnceLock<TextResult<Slugifier>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Slugifier::new(TextConfig::default()))
        .as_ref()
        .map_err(TextError::clone)
}

/// Converts `text` into a slug with the default configuration.
///
/// # Examples
///
/// ```
/// use seqkit_text::slugify;
///
/// assert_eq!(slugify("").unwrap(), "");
/// assert_eq!(slugify("Hello World").unwrap(), "hello_world");
/// assert_eq!(slugify("100% Pure").unwrap(), "100_pure");
/// assert_eq!(slugify("Extra   spaces").unwrap(), "extra_spaces");
/// assert_eq!(slugify("¡Hola!").unwrap(), "hola");
/// ```
pub fn slugify(text: &str) -> TextResult<String> {
    default_slugifier()?.slugify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_slug(s: &str) -> bool {
        s.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
            && !s.starts_with('_')
            && !s.ends_with('_')
            && !s.contains("__")
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(slugify("").unwrap(), "");
        assert_eq!(slugify("Hello World").unwrap(), "hello_world");
        assert_eq!(slugify("100% Pure").unwrap(), "100_pure");
        assert_eq!(slugify("Extra   spaces").unwrap(), "extra_spaces");
        assert_eq!(slugify("¡Hola!").unwrap(), "hola");
    }

    #[test]
    fn test_non_ascii_is_dropped_not_transliterated() {
        assert_eq!(slugify("Crème brûlée").unwrap(), "crme_brle");
        assert_eq!(slugify("東京 Tokyo").unwrap(), "tokyo");
        assert_eq!(slugify("日本語").unwrap(), "");
    }

    #[test]
    fn test_underscores_are_normalised() {
        assert_eq!(slugify("__init__").unwrap(), "init");
        assert_eq!(slugify("snake__case_name").unwrap(), "snake_case_name");
        assert_eq!(slugify("a _ b").unwrap(), "a_b");
    }

    #[test]
    fn test_whitespace_variants() {
        assert_eq!(slugify("\tTabbed\nLines\r\n").unwrap(), "tabbed_lines");
        assert_eq!(slugify("   ").unwrap(), "");
        assert_eq!(slugify("!!!").unwrap(), "");
        assert_eq!(slugify("a\x0Bb\x0Cc\rd").unwrap(), "a_b_c_d");
        assert_eq!(slugify("\x0B\x0C\r").unwrap(), "");
    }

    #[test]
    fn test_punctuation_and_digits() {
        assert_eq!(slugify("Rust 2021: Edition!").unwrap(), "rust_2021_edition");
        assert_eq!(slugify("C++ & C#").unwrap(), "c_c");
    }

    #[test]
    fn test_pathological_whitespace_completes() {
        let input = format!("a{}b", " \t".repeat(20_000));
        assert_eq!(slugify(&input).unwrap(), "a_b");
    }

    #[test]
    fn test_zero_ceiling_reports_timeout() {
        let slugifier = Slugifier::new(TextConfig {
            pattern_timeout_ms: 0,
        })
        .unwrap();
        let input = "Some Words! ".repeat(100_000);
        let err = slugifier.slugify(&input).unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_zero_ceiling_still_handles_empty() {
        let slugifier = Slugifier::new(TextConfig {
            pattern_timeout_ms: 0,
        })
        .unwrap();
        assert_eq!(slugifier.slugify("").unwrap(), "");
        assert_eq!(slugifier.ceiling(), Duration::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Property test: output always satisfies the slug character rules.
        #[test]
        fn prop_output_is_slug(input in "\\PC{0,64}") {
            let slug = slugify(&input).unwrap();
            prop_assert!(is_slug(&slug), "{:?} -> {:?}", input, slug);
        }

        /// Property test: slugify is idempotent.
        #[test]
        fn prop_idempotent(input in "(\\PC|\\s){0,64}") {
            let once = slugify(&input).unwrap();
            let twice = slugify(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
