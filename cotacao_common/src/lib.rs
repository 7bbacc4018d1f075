//!
//! Common types and utilities shared by the scraper and the command-line client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `tickers` — ticker symbols, the default list and file parsing helpers.
//! - `quote` — the `Quote` record produced per ticker.
//! - `config` — `ScrapeConfig`, the immutable settings for one run.
//! - `net` — upstream URL template and request constants.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod quote;
pub mod result;
pub mod tickers;

pub use config::ScrapeConfig;
pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
pub use tickers::Ticker;
