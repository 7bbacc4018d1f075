//! Error types shared by the scraper and the command-line front end.
//!
//! `QuoteError` covers the failures a run can hit: reading ticker input,
//! talking to the quote page, compiling the extraction pattern and writing
//! JSON output. Only input validation and output errors end the process;
//! network errors are handled per ticker by the batch runner.
use std::io;

use thiserror::Error;

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error while reading a ticker file or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Outbound HTTP request failed (connect, TLS, body read, etc.).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The extraction pattern could not be compiled.
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// More tickers were requested than a single run accepts.
    #[error("Máximo {max} por vez")]
    TooManyTickers {
        /// Number of tickers that were supplied.
        count: usize,
        /// Upper bound for a single run.
        max: usize,
    },

    /// A ticker symbol was empty or contained characters that cannot be sent upstream.
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidTicker(String),

    /// Error while parsing a ticker file into `Ticker` values.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),
}
