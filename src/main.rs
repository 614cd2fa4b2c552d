//! Censored word CLI application.
//!
//! Checks a message against a censored word list and reports every censored
//! term found, with exit codes suitable for scripting.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use censor::{CensorConfig, CensorMatches, Censorship};

/// Censored word checker
///
/// Reads a message from a file or stdin and reports the censored words it
/// contains. Exits with 0 when the text is clean and 1 when censored words
/// were found.
#[derive(Parser)]
#[command(name = "censor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Word list file, one entry per line
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Censored word entry (can be specified multiple times)
    #[arg(short = 'p', long = "word", value_name = "PATTERN")]
    word: Vec<String>,

    /// Newline-delimited word list
    #[arg(long, env = "CENSORED_WORDS", value_name = "TEXT", hide_env_values = true)]
    censored_words: Option<String>,

    /// Message file to check (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how each word list entry is classified
    Classify,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ExitCode {
    /// No censored words found
    Clean = 0,
    /// One or more censored words found
    Censored = 1,
    /// Configuration, argument or IO error
    Error = 2,
}

/// Check command handler with dependency injection.
struct CheckHandler {
    censorship: Censorship,
    verbose: bool,
}

impl CheckHandler {
    fn new(config: &CensorConfig, verbose: bool) -> Result<Self> {
        let censorship =
            Censorship::new(config).with_context(|| "Failed to compile censored words")?;
        Ok(Self {
            censorship,
            verbose,
        })
    }

    /// Checks a message and prints the censored terms found.
    fn check(&self, input: Option<&Path>) -> Result<ExitCode> {
        let text = read_message(input)?;

        if self.verbose {
            println!("Patterns: {}", self.censorship.patterns().len());
            println!("Input:    {} characters", text.chars().count());
        }

        match self.censorship.test(&text) {
            Some(matches) => {
                print_matches(&matches);
                if self.verbose {
                    println!(
                        "\n{} censored term(s), {} occurrence(s)",
                        matches.len(),
                        matches.total()
                    );
                }
                Ok(ExitCode::Censored)
            }
            None => {
                println!("clean");
                Ok(ExitCode::Clean)
            }
        }
    }

    /// Prints the classification of every configured entry.
    fn classify(&self) -> ExitCode {
        for pattern in self.censorship.patterns() {
            println!("{}\t{}", pattern.kind(), pattern.as_str());
        }
        ExitCode::Clean
    }
}

fn print_matches(matches: &CensorMatches) {
    for (term, count) in matches.iter() {
        println!("{}\t{}", term, count);
    }
}

fn read_message(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .with_context(|| "Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Builds the word list from every configured source, in order.
fn build_config(
    words_file: Option<&Path>,
    words: &[String],
    censored_words: Option<&str>,
) -> Result<CensorConfig> {
    let mut config = CensorConfig::default();

    if let Some(path) = words_file {
        config.extend(CensorConfig::from_file(path)?);
    }

    config.extend(words.iter().collect());

    if let Some(raw) = censored_words {
        config.extend(CensorConfig::load(raw));
    }

    if config.is_empty() {
        anyhow::bail!(
            "No censored words specified. Use --words, --word, or CENSORED_WORDS."
        );
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "off" };
    let filter =
        EnvFilter::try_from_env("CENSOR_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = build_config(
        cli.words.as_deref(),
        &cli.word,
        cli.censored_words.as_deref(),
    )?;
    let handler = CheckHandler::new(&config, cli.verbose)?;

    match &cli.command {
        Some(Commands::Classify) => Ok(handler.classify()),
        None => handler.check(cli.input.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("censor: {:#}", e);
            ExitCode::Error
        }
    };

    std::process::exit(exit_code as i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_building() {
        let config = build_config(None, &["Spam".to_string()], Some("eggs\n*ham*")).unwrap();
        assert_eq!(config.patterns(), &["spam", "eggs", "*ham*"]);
    }

    #[test]
    fn test_config_requires_words() {
        assert!(build_config(None, &[], None).is_err());
    }

    #[test]
    fn test_config_missing_file() {
        let err = build_config(Some(Path::new("/nonexistent/words.txt")), &[], None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
