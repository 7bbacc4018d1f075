//! Concurrent fetch + extract over a list of tickers.
//!
//! One thread per ticker, all spawned before any result is read. Each thread
//! owns a clone of the result `Sender` and sends exactly one outcome; the
//! calling thread is the only reader. Nothing is appended to shared state.
//!
//! A failed ticker is logged and left out of the result. It never affects the
//! other tickers in the batch.
use std::sync::Arc;
use std::thread;

use cotacao_common::{Quote, Result, Ticker};
use crossbeam_channel::unbounded;
use log::{debug, error, info, warn};

use crate::extractor::Extract;
use crate::fetcher::QuoteSource;

/// Outcome of one unit of work.
type UnitResult = (Ticker, Result<Quote>);

/// What a batch produced.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Quotes in completion order.
    pub quotes: Vec<Quote>,
    /// Tickers that could not be fetched, in completion order.
    pub failed: Vec<Ticker>,
}

/// Runs fetch + extract for every ticker concurrently.
pub struct BatchRunner<S, E> {
    source: Arc<S>,
    extractor: Arc<E>,
}

impl<S, E> BatchRunner<S, E>
where
    S: QuoteSource + 'static,
    E: Extract + 'static,
{
    /// Create a runner over `source` and `extractor`.
    pub fn new(source: S, extractor: E) -> Self {
        Self {
            source: Arc::new(source),
            extractor: Arc::new(extractor),
        }
    }

    /// Fetches every ticker and waits for all of them.
    ///
    /// The caller is responsible for bounding `tickers`; there is no worker
    /// pool and no cap on the number of threads.
    pub fn run(&self, tickers: &[Ticker]) -> BatchReport {
        let (result_tx, result_rx) = unbounded::<UnitResult>();
        let mut handles = Vec::with_capacity(tickers.len());
        let mut report = BatchReport::default();

        for ticker in tickers {
            let tx = result_tx.clone();
            let source = Arc::clone(&self.source);
            let extractor = Arc::clone(&self.extractor);
            let unit_ticker = ticker.clone();

            let spawned = thread::Builder::new()
                .name(format!("quote-{}", ticker))
                .spawn(move || {
                    debug!("Fetching {}", unit_ticker);
                    let outcome = source
                        .fetch(&unit_ticker)
                        .map(|body| extractor.extract(&unit_ticker, &body));
                    if let Err(e) = tx.send((unit_ticker, outcome)) {
                        error!("Failed to hand back result: {}", e);
                    }
                });

            match spawned {
                Ok(handle) => handles.push((ticker.clone(), handle)),
                Err(e) => {
                    error!("Failed to start fetch for {}: {}", ticker, e);
                    report.failed.push(ticker.clone());
                }
            }
        }
        // Only the unit threads hold senders now, so the loop below ends
        // once the last of them finishes.
        drop(result_tx);

        for (ticker, outcome) in result_rx.iter() {
            match outcome {
                Ok(quote) => {
                    if quote.is_blank() {
                        warn!("No price fields found for {}", ticker);
                    } else {
                        debug!("Finished {}", ticker);
                    }
                    report.quotes.push(quote);
                }
                Err(e) => {
                    error!("{}: {}", ticker, e);
                    report.failed.push(ticker);
                }
            }
        }

        for (ticker, handle) in handles {
            // A unit that panicked never reached its send.
            if handle.join().is_err() {
                error!("Fetch for {} panicked", ticker);
                report.failed.push(ticker);
            }
        }

        info!(
            "Batch finished: {} quotes, {} failed, {} requested",
            report.quotes.len(),
            report.failed.len(),
            tickers.len()
        );
        report
    }
}
