//! # seqkit_text: Bounded-Time Text Normalisation
//!
//! ## Text Layer Role
//!
//! seqkit_text builds on `seqkit_core` and provides:
//! - Slug generation: `slugify`, `Slugifier` (`slug`)
//! - Markup stripping: `strip_html`, `strip_bbcode`, `MarkupStripper` (`markup`)
//! - Timed pattern passes with a per-pass ceiling (`pattern`)
//! - Configuration loading: `TextConfig` (`config`)
//! - Error types: `TextError`, `ConfigError` (`error`, `config`)
//!
//! ## Bounded Time
//!
//! Every pattern pass runs on the `regex` crate, which matches in linear
//! time. Each pass is additionally timed against the configured ceiling
//! (100 ms by default) and fails with `SeqError::PatternTimeout` rather
//! than returning a late result.
//!
//! ## Usage Examples
//!
//! ```rust
//! use seqkit_text::{slugify, strip_html};
//!
//! assert_eq!(slugify("Hello World").unwrap(), "hello_world");
//! assert_eq!(slugify("100% Pure").unwrap(), "100_pure");
//! assert_eq!(strip_html("<b>bold</b> move").unwrap(), "bold move");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod markup;
pub mod pattern;
pub mod slug;

pub use config::{build_config, ConfigError, TextConfig};
pub use error::{TextError, TextResult};
pub use markup::{strip_bbcode, strip_html, MarkupStripper};
pub use slug::{slugify, Slugifier};
