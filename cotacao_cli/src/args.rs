//! Command-line arguments for cotacao.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::presenter::OutputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cotacao", version, about, long_about = None)]
pub struct Args {
    /// Ticker symbols to query, case-insensitive (e.g. itub4 petr4).
    /// A built-in list is used when none are given.
    pub tickers: Vec<String>,

    /// Outputs to json
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Output format. `-j` takes precedence.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Outputs how long the command took to run
    #[arg(short = 't', long = "time")]
    pub time: bool,

    /// Path to a text file with more tickers to query.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Per-request timeout in seconds. Requests wait indefinitely when omitted.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// Format chosen by the flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Per-request timeout, if one was asked for.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Ticker file path with surrounding whitespace and quotes removed.
    ///
    /// This allows passing Windows paths in quotes without breaking parsing.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(normalize_path)
    }
}

fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
