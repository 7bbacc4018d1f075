//! Quote scraper — fetches the quote page for each ticker and extracts price fields.
//!
//! This crate wires together three building blocks:
//!
//! - `fetcher` — `QuoteSource`, the seam for getting a page body, and `HttpFetcher`,
//!   its blocking HTTP implementation.
//! - `extractor` — `Extract`, the seam for turning a body into a `Quote`, and
//!   `PatternExtractor`, the regex-based implementation for the current page layout.
//! - `batch` — `BatchRunner`, which runs fetch + extract on one thread per ticker and
//!   collects the outcomes over a channel.
//!
//! Failures are per ticker: a ticker whose fetch fails is logged and dropped while the
//! rest of the batch carries on.
#![warn(missing_docs)]
pub mod batch;
pub mod extractor;
pub mod fetcher;

pub use batch::{BatchReport, BatchRunner};
pub use extractor::{Extract, PatternExtractor};
pub use fetcher::{HttpFetcher, QuoteSource};
