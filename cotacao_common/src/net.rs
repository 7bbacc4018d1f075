//! Upstream endpoint constants and URL helpers.

/// Exchange suffix appended to every symbol on the quote page.
pub const EXCHANGE: &str = "BVMF";

/// Placeholder replaced by the ticker symbol in a URL template.
pub const TICKER_PLACEHOLDER: &str = "{ticker}";

/// Quote page queried once per ticker.
pub const QUOTE_URL_TEMPLATE: &str = "https://www.google.com/finance/quote/{ticker}:BVMF";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("cotacao/", env!("CARGO_PKG_VERSION"));

/// Expands `template` for `symbol`, e.g. `.../quote/{ticker}:BVMF` -> `.../quote/ITUB4:BVMF`.
pub fn quote_url(template: &str, symbol: &str) -> String {
    template.replace(TICKER_PLACEHOLDER, symbol)
}
