//! Censored word detection for user-submitted message text.
//!
//! This library finds occurrences of configured censored words in text,
//! supporting three kinds of entries in a newline-delimited word list:
//!
//! - **Exact**: `spam` matches the token `spam` (case-insensitive)
//! - **Wildcard**: `*spam*` matches `spammer` or `antispam`
//! - **Partial**: `~badword~` also matches `bad-word` or `b.a.d w.o.r.d`,
//!   where the phrase is split across several delimited tokens
//!
//! Bbcode-style tags (`[b]`, `[/url]`) are removed before matching.
//!
//! # Architecture
//!
//! - [`config`]: Loading and normalizing the word list
//! - [`domain`]: Tokenization, pattern classification and span matching
//! - [`censorship`]: The matching service and its result type
//! - [`error`]: Error handling
//!
//! # Quick Start
//!
//! ```
//! use censor::{CensorConfig, Censorship};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CensorConfig::load("spam\n*eggs*\n~badword~");
//! let censorship = Censorship::new(&config)?;
//!
//! let matches = censorship.test("Spam with [b]bad[/b]-word!").unwrap();
//! assert_eq!(matches.get("spam"), Some(1));
//! assert_eq!(matches.get("badword"), Some(1));
//!
//! assert!(censorship.test("a perfectly clean message").is_none());
//! # Ok(())
//! # }
//! ```

pub mod censorship;
pub mod config;
pub mod domain;
pub mod error;

pub use censorship::{CensorMatches, Censorship};
pub use config::CensorConfig;
pub use domain::{ForbiddenPattern, PatternKind};
pub use error::{CensorError, CensorResult};
