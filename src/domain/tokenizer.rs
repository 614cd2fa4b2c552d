//! Text normalization and tokenization.
//!
//! Text is case-folded, stripped of bbcode-style tags and split on a fixed
//! delimiter class into an ordered token sequence.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex patterns used to prepare message text for matching.
pub struct TextPatterns;

impl TextPatterns {
    /// Tag-like markup such as `[b]`, `[/quote]` or `[url=...]`.
    pub fn markup_tag() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"(?i)\[/?[a-z]+[^\]]*\]").expect("Valid regex pattern"));
        &PATTERN
    }

    /// One or more word delimiters: whitespace plus ASCII punctuation.
    pub fn delimiters() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"[\s\x21-\x2F\x3A-\x40\x5B-\x60\x7B-\x7E]+")
                .expect("Valid regex pattern")
        });
        &PATTERN
    }
}

/// Lower-cases the text and removes markup tags.
///
/// Tags are removed without inserting a separator, so `[b]bad[/b]word`
/// becomes `badword`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    TextPatterns::markup_tag()
        .replace_all(&lowered, "")
        .into_owned()
}

/// Splits normalized text into non-empty tokens, preserving order.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    TextPatterns::delimiters()
        .split(normalized)
        .filter(|token| !token.is_empty())
        .collect()
}
