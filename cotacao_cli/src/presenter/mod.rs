//! Output of a finished batch.
//!
//! Quotes arrive in completion order. They are sorted by ticker here so the
//! output is the same however the fetches finished, then written as either:
//! - `table`: aligned, colored rows for a terminal.
//! - `json`: a single JSON array.
//!
//! `change` holds the percentage change shown in the table.
use std::io::Write;

use clap::ValueEnum;
use cotacao_common::{Quote, Result};
use strum_macros::Display;

pub mod change;
pub mod json;
pub mod table;

/// ANSI reset sequence.
pub(crate) const RESET: &str = "\x1b[0m";

/// How the quotes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Colored table.
    Table,
    /// JSON array.
    Json,
}

/// Sorts ascending by ticker, comparing bytes.
pub fn sort_quotes(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| a.ticker.cmp(&b.ticker));
}

/// Sorts `quotes` and writes them to `out` in `format`.
pub fn render<W: Write>(mut quotes: Vec<Quote>, format: OutputFormat, out: &mut W) -> Result<()> {
    sort_quotes(&mut quotes);
    log::debug!("Rendering {} quotes as {}", quotes.len(), format);
    match format {
        OutputFormat::Table => table::render(&quotes, out)?,
        OutputFormat::Json => json::render(&quotes, out)?,
    }
    Ok(())
}
