//! Censored word pattern classification and evaluation.
//!
//! Each configured entry is classified once into one of three kinds:
//! - plain words match a token exactly (`spam`)
//! - entries containing `*` are anchored wildcards (`*spam*`)
//! - entries containing `~` are partial phrases that may span several
//!   delimited tokens (`~badword~`)
//!
//! When an entry carries both markers the wildcard wins.

use super::span;
use crate::error::{CensorError, CensorResult};
use regex::Regex;
use std::fmt;

/// Classification of a configured entry, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Exact,
    Wildcard,
    Partial,
    /// Blank line in the word list; never matches.
    Empty,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Wildcard => "wildcard",
            Self::Partial => "partial",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// A successful evaluation of one pattern at one token position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    /// Term the occurrence is counted under.
    pub term: String,
    /// Index of the last token covered by the match.
    pub last_index: usize,
}

/// One compiled censored word entry.
#[derive(Debug, Clone)]
pub enum ForbiddenPattern {
    Exact(String),
    Wildcard { raw: String, regex: Regex },
    Partial { raw: String, core: String },
}

impl ForbiddenPattern {
    pub const WILDCARD_MARKER: char = '*';
    pub const PARTIAL_MARKER: char = '~';

    /// Classifies and compiles a normalized entry.
    pub fn compile(raw: &str) -> CensorResult<Self> {
        if raw.contains(Self::WILDCARD_MARKER) {
            let regex = Regex::new(&Self::wildcard_regex(raw)).map_err(|e| {
                CensorError::PatternError {
                    pattern: raw.to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(Self::Wildcard {
                raw: raw.to_string(),
                regex,
            })
        } else if raw.contains(Self::PARTIAL_MARKER) {
            Ok(Self::Partial {
                raw: raw.to_string(),
                core: raw.replace(Self::PARTIAL_MARKER, ""),
            })
        } else {
            Ok(Self::Exact(raw.to_string()))
        }
    }

    /// Translates a wildcard entry into an anchored regex.
    ///
    /// Literal text is escaped and every `*` becomes `.*`.
    pub fn wildcard_regex(raw: &str) -> String {
        let body = raw
            .split(Self::WILDCARD_MARKER)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        format!("^(?:{})$", body)
    }

    /// Returns the entry as configured.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(word) => word,
            Self::Wildcard { raw, .. } | Self::Partial { raw, .. } => raw,
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Exact(word) if word.is_empty() => PatternKind::Empty,
            Self::Exact(_) => PatternKind::Exact,
            Self::Wildcard { .. } => PatternKind::Wildcard,
            Self::Partial { .. } => PatternKind::Partial,
        }
    }

    /// Evaluates the pattern against the token at `index`.
    ///
    /// Exact and wildcard hits are counted under the token itself. Partial
    /// hits that span neighbouring tokens are counted under the phrase and
    /// report the last token they consumed.
    pub fn evaluate(&self, tokens: &[&str], index: usize) -> Option<PatternHit> {
        let token = *tokens.get(index)?;

        match self {
            Self::Exact(word) => (word == token).then(|| PatternHit {
                term: token.to_string(),
                last_index: index,
            }),
            Self::Wildcard { regex, .. } => regex.is_match(token).then(|| PatternHit {
                term: token.to_string(),
                last_index: index,
            }),
            Self::Partial { core, .. } => Self::evaluate_partial(core, tokens, index),
        }
    }

    fn evaluate_partial(core: &str, tokens: &[&str], index: usize) -> Option<PatternHit> {
        if core.is_empty() {
            return None;
        }

        let token = tokens[index];
        if token.contains(core) {
            return Some(PatternHit {
                term: token.to_string(),
                last_index: index,
            });
        }

        let position = core.find(token)?;
        if position > 0 && !span::look_behind(tokens, index, &core[..position]) {
            return None;
        }

        let end = position + token.len();
        let last_index = if end < core.len() {
            span::look_ahead(tokens, index + 1, &core[end..])?
        } else {
            index
        };

        Some(PatternHit {
            term: core.to_string(),
            last_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(raw: &str) -> ForbiddenPattern {
        ForbiddenPattern::compile(raw).unwrap()
    }

    #[test]
    fn test_classification() {
        assert_eq!(compile("spam").kind(), PatternKind::Exact);
        assert_eq!(compile("*spam").kind(), PatternKind::Wildcard);
        assert_eq!(compile("~spam~").kind(), PatternKind::Partial);
        assert_eq!(compile("").kind(), PatternKind::Empty);
    }

    #[test]
    fn test_wildcard_takes_precedence() {
        let pattern = compile("~sp*m~");
        assert_eq!(pattern.kind(), PatternKind::Wildcard);
        assert_eq!(pattern.as_str(), "~sp*m~");
    }

    #[test]
    fn test_wildcard_regex_escapes_literals() {
        assert_eq!(ForbiddenPattern::wildcard_regex("a.b*"), r"^(?:a\.b.*)$");
        assert_eq!(ForbiddenPattern::wildcard_regex("*"), "^(?:.*)$");
        assert!(ForbiddenPattern::compile("(*[").is_ok());
    }

    #[test]
    fn test_exact_evaluation() {
        let pattern = compile("spam");
        assert!(pattern.evaluate(&["spam"], 0).is_some());
        assert!(pattern.evaluate(&["spammer"], 0).is_none());
        assert!(pattern.evaluate(&["spam"], 1).is_none());
    }

    #[test]
    fn test_wildcard_evaluation_is_anchored() {
        let both = compile("*spam*");
        for token in ["spam", "spammer", "antispam"] {
            assert!(both.evaluate(&[token], 0).is_some(), "{}", token);
        }

        let trailing = compile("spam*");
        assert!(trailing.evaluate(&["spammer"], 0).is_some());
        assert!(trailing.evaluate(&["antispam"], 0).is_none());
    }

    #[test]
    fn test_wildcard_hit_uses_token() {
        let hit = compile("sp*m").evaluate(&["spoom"], 0).unwrap();
        assert_eq!(hit.term, "spoom");
        assert_eq!(hit.last_index, 0);
    }

    #[test]
    fn test_partial_inside_token() {
        let hit = compile("~badword~").evaluate(&["verybadwords"], 0).unwrap();
        assert_eq!(hit.term, "verybadwords");
        assert_eq!(hit.last_index, 0);
    }

    #[test]
    fn test_partial_look_ahead() {
        let tokens = ["bad", "word", "here"];
        let hit = compile("~badword~").evaluate(&tokens, 0).unwrap();
        assert_eq!(hit.term, "badword");
        assert_eq!(hit.last_index, 1);
    }

    #[test]
    fn test_partial_look_behind() {
        // Starting in the middle of the phrase only confirms the prefix.
        let tokens = ["foo", "bar"];
        let hit = compile("~foobar~").evaluate(&tokens, 1).unwrap();
        assert_eq!(hit.term, "foobar");
        assert_eq!(hit.last_index, 1);
    }

    #[test]
    fn test_partial_both_directions() {
        let tokens = ["foo", "bar", "baz"];
        let hit = compile("~foobarbaz~").evaluate(&tokens, 1).unwrap();
        assert_eq!(hit.last_index, 2);
    }

    #[test]
    fn test_partial_rejects_unrelated_neighbours() {
        let tokens = ["bad", "wolf"];
        assert!(compile("~badword~").evaluate(&tokens, 0).is_none());
        assert!(compile("~badword~").evaluate(&tokens, 1).is_none());
    }

    #[test]
    fn test_empty_partial_never_matches() {
        assert!(compile("~~").evaluate(&["anything"], 0).is_none());
    }
}
