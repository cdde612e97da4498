//! Error types for structured error handling.
//!
//! This module provides:
//! - `SeqError`: Errors from sampling, selection, flattening and text passes

use thiserror::Error;

/// Convenience alias for results carrying a [`SeqError`].
pub type SeqResult<T> = Result<T, SeqError>;

/// Categorised sequence-operation errors.
///
/// All errors are raised synchronously to the immediate caller and no
/// operation produces a partial result alongside one.
///
/// # Variants
/// - `InvalidArgument`: Structurally invalid input that cannot be interpreted
/// - `EmptyCollection`: Fewer elements than the operation requires
/// - `PatternTimeout`: A bounded-time pattern pass exceeded its ceiling
///
/// # Examples
/// ```
/// use seqkit_core::types::SeqError;
///
/// let err = SeqError::EmptyCollection { need: 3, got: 1 };
/// assert_eq!(format!("{}", err), "Collection too small: need at least 3 elements, got 1");
///
/// let err = SeqError::PatternTimeout { pass: "collapse", limit_ms: 100 };
/// assert!(format!("{}", err).contains("100ms"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Collection holds fewer elements than required.
    #[error("Collection too small: need at least {need} elements, got {got}")]
    EmptyCollection {
        /// Minimum number of elements required
        need: usize,
        /// Number of elements provided
        got: usize,
    },

    /// A pattern pass ran past its execution ceiling.
    #[error("Pattern pass '{pass}' exceeded its {limit_ms}ms ceiling")]
    PatternTimeout {
        /// Name of the pass that overran
        pass: &'static str,
        /// Ceiling in milliseconds
        limit_ms: u64,
    },
}

impl SeqError {
    /// Create an invalid-argument error from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SeqError::InvalidArgument(message.into())
    }

    /// Returns an `EmptyCollection` error unless `got >= need`.
    ///
    /// # Examples
    /// ```
    /// use seqkit_core::types::SeqError;
    ///
    /// assert!(SeqError::require_len(3, 5).is_ok());
    /// assert_eq!(
    ///     SeqError::require_len(3, 2),
    ///     Err(SeqError::EmptyCollection { need: 3, got: 2 })
    /// );
    /// ```
    pub fn require_len(need: usize, got: usize) -> SeqResult<()> {
        if got < need {
            return Err(SeqError::EmptyCollection { need, got });
        }
        Ok(())
    }

    /// Whether this error is a pattern-timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SeqError::PatternTimeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SeqError::invalid_argument("bound must be positive");
        assert_eq!(format!("{}", err), "Invalid argument: bound must be positive");
    }

    #[test]
    fn test_empty_collection_display() {
        let err = SeqError::EmptyCollection { need: 1, got: 0 };
        assert_eq!(
            format!("{}", err),
            "Collection too small: need at least 1 elements, got 0"
        );
    }

    #[test]
    fn test_pattern_timeout_display() {
        let err = SeqError::PatternTimeout {
            pass: "strip_html",
            limit_ms: 250,
        };
        assert_eq!(
            format!("{}", err),
            "Pattern pass 'strip_html' exceeded its 250ms ceiling"
        );
        assert!(err.is_timeout());
    }

    #[test]
    fn test_require_len_boundaries() {
        assert!(SeqError::require_len(0, 0).is_ok());
        assert!(SeqError::require_len(3, 3).is_ok());
        assert!(SeqError::require_len(3, 2).is_err());
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SeqError>();
    }

    #[test]
    fn test_error_clone_eq() {
        let err = SeqError::EmptyCollection { need: 3, got: 0 };
        assert_eq!(err.clone(), err);
        assert!(!err.is_timeout());
    }
}
