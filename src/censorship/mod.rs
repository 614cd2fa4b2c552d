//! Censorship service.
//!
//! [`Censorship`] compiles a [`CensorConfig`] once and then checks any
//! number of texts against it. Each check owns its tokens and match counts,
//! so a single instance can be shared across threads.

pub mod matches;

pub use matches::CensorMatches;

use crate::config::CensorConfig;
use crate::domain::{normalize, tokenize, ForbiddenPattern, PatternKind};
use crate::error::CensorResult;

/// Finds censored words in message text.
///
/// Cost is proportional to tokens times patterns, plus the span walk for
/// partial patterns. Callers that accept untrusted input should bound its
/// size before calling [`Censorship::test`].
#[derive(Debug, Clone, Default)]
pub struct Censorship {
    patterns: Vec<ForbiddenPattern>,
}

impl Censorship {
    /// Classifies and compiles every configured entry.
    pub fn new(config: &CensorConfig) -> CensorResult<Self> {
        let patterns = config
            .patterns()
            .iter()
            .map(|raw| ForbiddenPattern::compile(raw))
            .collect::<CensorResult<Vec<_>>>()?;

        let count = |kind: PatternKind| patterns.iter().filter(|p| p.kind() == kind).count();
        tracing::debug!(
            exact = count(PatternKind::Exact),
            wildcard = count(PatternKind::Wildcard),
            partial = count(PatternKind::Partial),
            empty = count(PatternKind::Empty),
            "compiled censored word patterns"
        );

        Ok(Self { patterns })
    }

    /// Returns the compiled patterns in configured order.
    pub fn patterns(&self) -> &[ForbiddenPattern] {
        &self.patterns
    }

    /// Returns the censored words found in `text`, or `None` if it is clean.
    ///
    /// Each token is checked against the patterns in configured order and
    /// counted for the first one that matches. A partial pattern spanning
    /// several tokens consumes them all, and scanning resumes after the
    /// last one.
    pub fn test(&self, text: &str) -> Option<CensorMatches> {
        let normalized = normalize(text);
        let tokens = tokenize(&normalized);
        let mut matches = CensorMatches::default();

        let mut index = 0;
        while index < tokens.len() {
            for pattern in &self.patterns {
                if let Some(hit) = pattern.evaluate(&tokens, index) {
                    tracing::trace!(
                        pattern = pattern.as_str(),
                        term = hit.term.as_str(),
                        index,
                        "censored word found"
                    );
                    index = hit.last_index;
                    matches.record(hit.term);
                    break;
                }
            }
            index += 1;
        }

        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }

    /// Returns true if no censored word occurs in `text`.
    pub fn is_clean(&self, text: &str) -> bool {
        self.test(text).is_none()
    }
}
