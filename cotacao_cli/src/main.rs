//! cotacao — prints near-real-time quotes for B3 tickers scraped from the
//! Google Finance quote page.
//!
//! Each ticker is fetched on its own thread, the price fields are extracted
//! from the page, and the quotes are printed sorted by ticker as a colored
//! table or as JSON.
//!
//! Usage example (CLI):
//! ```bash
//! cotacao itub4 petr4 vale3
//! cotacao -j -t --file ./tickers.txt
//! ```
//!
//! At most 100 tickers are accepted per run. Tickers whose page cannot be
//! fetched are logged to stderr and left out of the output.
#![warn(missing_docs)]
mod app;
mod args;
mod presenter;

use std::io;
use std::process;

use clap::Parser;
use cotacao_common::{Result, ScrapeConfig};
use cotacao_scraper::{BatchRunner, HttpFetcher, PatternExtractor};

use crate::args::Args;

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ScrapeConfig::default().with_timeout(args.request_timeout());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    app::run(
        args,
        &config,
        |config| {
            Ok(BatchRunner::new(
                HttpFetcher::new(config)?,
                PatternExtractor::new()?,
            ))
        },
        &mut out,
    )
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
