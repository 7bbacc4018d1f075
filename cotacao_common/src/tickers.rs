//! Ticker symbols and parsing helpers.
//!
//! A `Ticker` is any symbol the quote page understands; it is normalized to
//! uppercase on construction so `itub4` and `ITUB4` are the same request.
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Symbols queried when the caller does not name any.
pub const DEFAULT_TICKERS: [&str; 10] = [
    "AAPL34", "B3SA3", "BBDC4", "GOGL34", "ITUB4", "NVDC34", "TSLA34", "CVCB3", "FBOK34", "IVVB11",
];

/// Trait providing file parsing for tickers.
pub trait TickerParser {
    /// Parses tickers from a buffered reader.
    ///
    /// Symbols may be separated by commas, spaces or new lines. Empty entries
    /// are skipped. Returns an error if any entry is not a valid symbol.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Ticker>, QuoteError>;
}

impl TickerParser for Ticker {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, QuoteError> {
        let mut tickers = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(QuoteError::Io)?;
            for symbol in split_symbols(&line) {
                match symbol.parse::<Self>() {
                    Ok(ticker) => tickers.push(ticker),
                    Err(e) => return Err(QuoteError::ParseTickersFile(e.to_string())),
                }
            }
        }
        Ok(tickers)
    }
}

/// Splits a line of text into raw symbols on commas and whitespace.
pub fn split_symbols(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Uppercased ticker symbol, e.g. `ITUB4`.
///
/// Ordering is the ordinal byte order of the symbol, which is what the
/// presenter sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Builds a ticker from a symbol known to be valid, such as `DEFAULT_TICKERS`.
    pub(crate) fn from_symbol(symbol: &str) -> Self {
        Ticker(symbol.trim().to_ascii_uppercase())
    }

    /// The normalized symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ticker, returning the symbol.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn is_symbol_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
    }
}

impl FromStr for Ticker {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(Self::is_symbol_char) {
            return Err(QuoteError::InvalidTicker(s.to_string()));
        }
        Ok(Ticker(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
