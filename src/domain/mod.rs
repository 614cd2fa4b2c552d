//! Matching primitives for censored word detection.
//!
//! This module contains the pure building blocks used by the
//! [`Censorship`](crate::Censorship) service: text normalization and
//! tokenization, pattern classification, and the cross-token span walk
//! used by partial patterns.

pub mod pattern;
pub mod span;
pub mod tokenizer;

pub use pattern::{ForbiddenPattern, PatternHit, PatternKind};
pub use span::{look_ahead, look_behind};
pub use tokenizer::{normalize, tokenize, TextPatterns};
