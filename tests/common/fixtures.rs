//! Word list fixtures.

#![allow(dead_code)]

use anyhow::Result;
use censor::{CensorConfig, Censorship};
use std::fs;
use std::path::{Path, PathBuf};

/// A word list mixing every entry kind.
pub const MIXED_WORDS: &str = "spam\n*eggs*\n~badword~\n~foobarbaz~\nham*";

/// Builds a censorship service from a newline-delimited word list.
pub fn censorship(words: &str) -> Censorship {
    Censorship::new(&CensorConfig::load(words)).expect("word list should compile")
}

/// Writes a word list file into `dir` and returns its path.
pub fn write_word_list(dir: &Path, words: &str) -> Result<PathBuf> {
    let path = dir.join("words.txt");
    fs::write(&path, words)?;
    Ok(path)
}

/// Writes a message file into `dir` and returns its path.
pub fn write_message(dir: &Path, text: &str) -> Result<PathBuf> {
    let path = dir.join("message.txt");
    fs::write(&path, text)?;
    Ok(path)
}
