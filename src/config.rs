//! Censored word list configuration.
//!
//! The word list is loaded once, normalized, and then only ever read. A
//! [`CensorConfig`] is built at start-up and handed to
//! [`Censorship::new`](crate::Censorship::new).

use crate::error::{CensorError, CensorResult};
use std::path::Path;

/// Ordered list of raw censored word entries.
///
/// Entries are lower-cased and trimmed. Order and duplicates are preserved,
/// and lines that are empty after trimming are kept as empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensorConfig {
    words: Vec<String>,
}

impl CensorConfig {
    /// Parses a newline-delimited word list.
    ///
    /// An empty blob yields a single empty entry, which never matches.
    pub fn load(raw: &str) -> Self {
        let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
        unified.split('\n').collect()
    }

    /// Reads a word list file and parses it with [`CensorConfig::load`].
    ///
    /// The file must be UTF-8.
    pub fn from_file(path: &Path) -> CensorResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| CensorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw = String::from_utf8(bytes).map_err(|e| CensorError::InvalidInput {
            parameter: path.display().to_string(),
            reason: format!("word list is not valid UTF-8: {}", e),
        })?;

        let config = Self::load(&raw);
        tracing::debug!(
            "loaded {} censored word entries from {}",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    /// Appends the entries of another config, keeping their order.
    pub fn extend(&mut self, other: CensorConfig) {
        self.words.extend(other.words);
    }

    /// Returns the normalized entries in configured order.
    pub fn patterns(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CensorConfig {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase().trim().to_string())
                .collect(),
        }
    }
}
