//! Run configuration.
//!
//! Everything a run needs to know up front lives in `ScrapeConfig`. It is built
//! once at startup and handed to the components that need it.
use std::time::Duration;

use crate::error::QuoteError;
use crate::net::{QUOTE_URL_TEMPLATE, USER_AGENT, quote_url};
use crate::tickers::{DEFAULT_TICKERS, Ticker};

/// Largest number of tickers accepted in a single run.
pub const MAX_TICKERS: usize = 100;

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// URL with a `{ticker}` placeholder.
    pub url_template: String,
    /// Upper bound on tickers per run.
    pub max_tickers: usize,
    /// Symbols used when the caller names none.
    pub default_tickers: Vec<Ticker>,
    /// Per-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
    /// User agent header value.
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url_template: QUOTE_URL_TEMPLATE.to_string(),
            max_tickers: MAX_TICKERS,
            default_tickers: DEFAULT_TICKERS
                .iter()
                .map(|s| Ticker::from_symbol(s))
                .collect(),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Quote page URL for `ticker`.
    pub fn url_for(&self, ticker: &Ticker) -> String {
        quote_url(&self.url_template, ticker.as_str())
    }

    /// Turns raw caller input into the tickers to query.
    ///
    /// The count is checked before any symbol is parsed, so an oversized
    /// request fails with `TooManyTickers` regardless of its contents. An
    /// empty request falls back to the default list.
    pub fn select_tickers<S: AsRef<str>>(&self, raw: &[S]) -> Result<Vec<Ticker>, QuoteError> {
        if raw.len() > self.max_tickers {
            return Err(QuoteError::TooManyTickers {
                count: raw.len(),
                max: self.max_tickers,
            });
        }
        if raw.is_empty() {
            return Ok(self.default_tickers.clone());
        }
        raw.iter().map(|s| s.as_ref().parse()).collect()
    }
}
