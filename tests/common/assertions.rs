//! Custom assertions for censorship testing.

#![allow(dead_code)]

use censor::Censorship;

/// Asserts that `text` is reported clean.
///
/// # Panics
/// Panics with the unexpected matches if any censored word was found.
pub fn assert_clean(censorship: &Censorship, text: &str) {
    if let Some(matches) = censorship.test(text) {
        panic!(
            "Text '{}' should be clean but matched: {:?}",
            text,
            matches.into_inner()
        );
    }
}

/// Asserts that `term` was found in `text` exactly `count` times.
///
/// # Panics
/// Panics if the text is clean or the count differs.
pub fn assert_censored(censorship: &Censorship, text: &str, term: &str, count: usize) {
    let matches = censorship
        .test(text)
        .unwrap_or_else(|| panic!("Text '{}' should contain '{}' but was clean", text, term));
    assert_eq!(
        matches.get(term),
        Some(count),
        "Unexpected count for '{}' in '{}': {:?}",
        term,
        text,
        matches
    );
}
