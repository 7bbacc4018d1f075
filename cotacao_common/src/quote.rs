//! Quote record produced for each ticker that was fetched.
//!
//! Price fields are kept as the strings found on the page. A field the
//! extractor could not locate is an empty string, never an error.
use serde::{Deserialize, Serialize};

use crate::tickers::Ticker;

/// Price snapshot for a single ticker at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Uppercased symbol the quote was requested for.
    pub ticker: String,
    /// Lowest price of the day.
    pub min: String,
    /// Current price.
    pub price: String,
    /// Highest price of the day.
    pub max: String,
    /// Previous session's closing price.
    pub prev_close: String,
}

impl Quote {
    /// A quote for `ticker` with every price field empty.
    pub fn empty(ticker: &Ticker) -> Self {
        Quote {
            ticker: ticker.to_string(),
            min: String::new(),
            price: String::new(),
            max: String::new(),
            prev_close: String::new(),
        }
    }

    /// `true` when no price field was found.
    pub fn is_blank(&self) -> bool {
        self.min.is_empty()
            && self.price.is_empty()
            && self.max.is_empty()
            && self.prev_close.is_empty()
    }
}
