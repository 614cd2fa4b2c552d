//! Cross-token span resolution for partial patterns.
//!
//! A partial pattern such as `~badword~` may be split by delimiters into
//! several tokens (`bad-word`, `b.a.d.w.o.r.d`). Once part of the pattern
//! has been located in the current token, these functions walk the
//! neighbouring tokens to confirm the remaining prefix or suffix.
//!
//! At every step a clean boundary match wins: if the neighbour ends with
//! (or starts with) the remaining text the walk succeeds. Otherwise, if the
//! whole neighbour is part of the remaining text, it is consumed and the
//! walk continues one token further.

/// Checks that `search` ends the token sequence just before `before`.
///
/// Returns `false` when the walk runs out of tokens.
pub fn look_behind(tokens: &[&str], before: usize, search: &str) -> bool {
    let Some(index) = before.checked_sub(1) else {
        return false;
    };
    let Some(&word) = tokens.get(index) else {
        return false;
    };

    if word.ends_with(search) {
        tracing::trace!(index, search, "look behind matched");
        true
    } else if let Some(rest) = search.strip_suffix(word) {
        look_behind(tokens, index, rest)
    } else {
        false
    }
}

/// Checks that `search` starts the token sequence at `index`.
///
/// Returns the index of the last token consumed, or `None` when the
/// remaining text cannot be matched.
pub fn look_ahead(tokens: &[&str], index: usize, search: &str) -> Option<usize> {
    let word = *tokens.get(index)?;

    if word.starts_with(search) {
        tracing::trace!(index, search, "look ahead matched");
        Some(index)
    } else if let Some(rest) = search.strip_prefix(word) {
        look_ahead(tokens, index + 1, rest)
    } else {
        None
    }
}
