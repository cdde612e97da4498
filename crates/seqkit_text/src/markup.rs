//! HTML and BBCode tag stripping.
//!
//! Tags are removed, text between them is kept. Entities are not decoded.

use std::sync::OnceLock;
use std::time::Duration;

use crate::config::TextConfig;
use crate::error::{TextError, TextResult};
use crate::pattern::PatternPass;

const HTML_TAG_PATTERN: &str = r"<[^>]*>";
const BBCODE_TAG_PATTERN: &str = r"\[/?[A-Za-z*][A-Za-z0-9*]*(?:=[^\]]*)?\]";

/// Markup stripper holding its compiled passes and ceiling.
///
/// # Examples
///
/// ```
/// use seqkit_text::{MarkupStripper, TextConfig};
///
/// let stripper = MarkupStripper::new(TextConfig::default()).unwrap();
/// assert_eq!(stripper.strip_html("<p>Hi <em>there</em></p>").unwrap(), "Hi there");
/// assert_eq!(stripper.strip_bbcode("[b]Hi[/b] [url=x]there[/url]").unwrap(), "Hi there");
/// ```
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    html: PatternPass,
    bbcode: PatternPass,
    ceiling: Duration,
}

impl MarkupStripper {
    /// Compiles the stripping passes with the ceiling from `config`.
    pub fn new(config: TextConfig) -> TextResult<Self> {
        Ok(Self {
            html: PatternPass::new("strip_html", HTML_TAG_PATTERN, "")?,
            bbcode: PatternPass::new("strip_bbcode", BBCODE_TAG_PATTERN, "")?,
            ceiling: config.pattern_timeout(),
        })
    }

    /// Removes every `<...>` tag.
    pub fn strip_html(&self, text: &str) -> TextResult<String> {
        Ok(self.html.apply(text, self.ceiling)?)
    }

    /// Removes every `[tag]`, `[/tag]`, `[tag=value]` and `[*]` token.
    pub fn strip_bbcode(&self, text: &str) -> TextResult<String> {
        Ok(self.bbcode.apply(text, self.ceiling)?)
    }
}

fn default_stripper() -> TextResult<&'static MarkupStripper> {
    static DEFAULT: OnceLock<TextResult<MarkupStripper>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| MarkupStripper::new(TextConfig::default()))
        .as_ref()
        .map_err(TextError::clone)
}

/// Removes HTML tags with the default configuration.
///
/// ```
/// use seqkit_text::strip_html;
///
/// assert_eq!(strip_html("a <br/>b").unwrap(), "a b");
/// ```
pub fn strip_html(text: &str) -> TextResult<String> {
    default_stripper()?.strip_html(text)
}

/// Removes BBCode tags with the default configuration.
///
/// ```
/// use seqkit_text::strip_bbcode;
///
/// assert_eq!(strip_bbcode("[list][*]one[*]two[/list]").unwrap(), "onetwo");
/// ```
pub fn strip_bbcode(text: &str) -> TextResult<String> {
    default_stripper()?.strip_bbcode(text)
}
