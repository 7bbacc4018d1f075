//! One run of the program, from parsed arguments to written output.
//!
//! Input is validated before the batch runner is even built, so a rejected
//! request never touches the network.
use std::fs::File;
use std::io::{BufReader, Write};
use std::time::{Duration, Instant};

use cotacao_common::tickers::TickerParser;
use cotacao_common::{Result, ScrapeConfig, Ticker};
use cotacao_scraper::{BatchRunner, Extract, QuoteSource};
use log::{debug, info};

use crate::args::Args;
use crate::presenter;

/// Name used in the timing line.
pub const PROGRAM_NAME: &str = "cotacao";

/// Positional symbols followed by the symbols from the ticker file, if any.
pub fn requested_symbols(args: &Args) -> Result<Vec<String>> {
    let mut symbols = args.tickers.clone();

    if let Some(path) = args.file_path() {
        debug!("Reading tickers from {}", path.display());
        let file = File::open(&path)?;
        let from_file = Ticker::parse_from_file(BufReader::new(file))?;
        info!("{} tickers read from {}", from_file.len(), path.display());
        symbols.extend(from_file.into_iter().map(Ticker::into_inner));
    }

    Ok(symbols)
}

/// `"<program> demorou <elapsed> para <count> tickers"`.
pub fn timing_line(program: &str, elapsed: Duration, count: usize) -> String {
    format!("{} demorou {:?} para {} tickers", program, elapsed, count)
}

/// Validates input, runs the batch and writes the result to `out`.
///
/// `build_runner` is only called once the tickers are known to be valid.
pub fn run<S, E, F, W>(args: &Args, config: &ScrapeConfig, build_runner: F, out: &mut W) -> Result<()>
where
    S: QuoteSource + 'static,
    E: Extract + 'static,
    F: FnOnce(&ScrapeConfig) -> Result<BatchRunner<S, E>>,
    W: Write,
{
    let symbols = requested_symbols(args)?;
    let tickers = config.select_tickers(&symbols)?;
    let runner = build_runner(config)?;

    let start = Instant::now();
    let report = runner.run(&tickers);
    presenter::render(report.quotes, args.output_format(), out)?;

    if args.time {
        writeln!(out, "{}", timing_line(PROGRAM_NAME, start.elapsed(), tickers.len()))?;
    }
    out.flush()?;
    Ok(())
}
