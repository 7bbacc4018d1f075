//! Outbound HTTP for the quote page.
//!
//! `QuoteSource` is the seam the batch runner talks to; `HttpFetcher` is the
//! real implementation, one blocking GET per call.
use cotacao_common::net::quote_url;
use cotacao_common::{Result, ScrapeConfig, Ticker};
use log::{debug, warn};
use reqwest::blocking::Client;

/// Anything that can hand back the raw quote page for a ticker.
pub trait QuoteSource: Send + Sync {
    /// Returns the response body for `ticker`, or the error that prevented getting one.
    fn fetch(&self, ticker: &Ticker) -> Result<Vec<u8>>;
}

/// Blocking HTTP client bound to a URL template.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url_template: String,
}

impl HttpFetcher {
    /// Builds the client from `config`. No retries; the timeout is whatever the config says.
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    /// URL requested for `ticker`.
    pub fn url(&self, ticker: &Ticker) -> String {
        quote_url(&self.url_template, ticker.as_str())
    }
}

impl QuoteSource for HttpFetcher {
    fn fetch(&self, ticker: &Ticker) -> Result<Vec<u8>> {
        let url = self.url(ticker);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        // The body still goes to the extractor; it decides what is usable.
        if !status.is_success() {
            warn!("{} answered {} for {}", url, status, ticker);
        }

        let body = response.bytes()?;
        debug!("{} returned {} bytes", ticker, body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn url_follows_template() {
        let fetcher = HttpFetcher::new(&ScrapeConfig::default()).unwrap();
        let ticker: Ticker = "itub4".parse().unwrap();
        assert_eq!(
            fetcher.url(&ticker),
            "https://www.google.com/finance/quote/ITUB4:BVMF"
        );
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        // Port 9 (discard) on loopback is closed on any sane test machine.
        let config = ScrapeConfig {
            url_template: "http://127.0.0.1:9/{ticker}".into(),
            ..ScrapeConfig::default()
        }
        .with_timeout(Some(Duration::from_secs(2)));
        let fetcher = HttpFetcher::new(&config).unwrap();
        let ticker: Ticker = "ITUB4".parse().unwrap();

        assert!(matches!(
            fetcher.fetch(&ticker),
            Err(cotacao_common::QuoteError::Network(_))
        ));
    }
}
