//! Match counts produced by a single censorship check.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Censored terms found in a text, with their occurrence counts.
///
/// Terms are kept in lexical order. A `CensorMatches` returned from
/// [`Censorship::test`](crate::Censorship::test) always holds at least one
/// term; clean text is reported as `None` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensorMatches {
    counts: BTreeMap<String, usize>,
}

impl CensorMatches {
    /// Counts one more occurrence of `term`.
    pub(crate) fn record(&mut self, term: String) {
        *self.counts.entry(term).or_insert(0) += 1;
    }

    /// Returns the occurrence count for a term.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.counts.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all terms.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    pub fn into_inner(self) -> BTreeMap<String, usize> {
        self.counts
    }
}

impl IntoIterator for CensorMatches {
    type Item = (String, usize);
    type IntoIter = btree_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
