//! Error types for the text layer.

use seqkit_core::types::SeqError;
use thiserror::Error;

use crate::config::ConfigError;

/// Convenience alias for results carrying a [`TextError`].
pub type TextResult<T> = Result<T, TextError>;

/// Text-layer errors.
///
/// # Variants
/// - `Seq`: A sequence-level failure, most notably `PatternTimeout`
/// - `Pattern`: A pattern failed to compile
/// - `Config`: Configuration could not be loaded or validated
///
/// # Examples
/// ```
/// use seqkit_core::types::SeqError;
/// use seqkit_text::TextError;
///
/// let err: TextError = SeqError::PatternTimeout { pass: "collapse", limit_ms: 100 }.into();
/// assert!(err.is_timeout());
/// assert_eq!(format!("{}", err), "Pattern pass 'collapse' exceeded its 100ms ceiling");
/// ```
#[derive(Error, Debug, Clone)]
pub enum TextError {
    /// Sequence-level failure.
    #[error(transparent)]
    Seq(#[from] SeqError),

    /// Pattern compilation failure.
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration failure.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TextError {
    /// Whether this error is a pattern-pass timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TextError::Seq(err) if err.is_timeout())
    }
}
