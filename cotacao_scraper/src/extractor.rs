//! Pulls price fields out of the quote page markup.
//!
//! The page is not an API. The pattern below matches its current layout and
//! will break when the layout changes; a non-match yields a blank quote
//! rather than an error.
use cotacao_common::{Quote, Result, Ticker};
use log::debug;
use regex::bytes::Regex;

/// Price, previous close and day range, in page order.
pub const QUOTE_PATTERN: &str = r#"(?s-u)YMlKec.+?>R\$(.+?)<.+?last closing price<.+?P6K39c">R\$(.+?)<.+?P6K39c">R\$(.+?)<"#;

/// Currency prefix stripped from the day range.
pub const CURRENCY_PREFIX: &str = "R$";

/// Separator between the low and high of the day range.
pub const RANGE_SEPARATOR: char = '-';

/// Turns a response body into a `Quote`.
pub trait Extract: Send + Sync {
    /// Never fails; fields that cannot be found are left empty.
    fn extract(&self, ticker: &Ticker, body: &[u8]) -> Quote;
}

/// Regex-driven extractor for the quote page.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Regex,
    currency: String,
}

impl PatternExtractor {
    /// Extractor for the current page layout.
    pub fn new() -> Result<Self> {
        Self::with_pattern(QUOTE_PATTERN, CURRENCY_PREFIX)
    }

    /// Extractor with a custom pattern. The pattern must define three groups:
    /// price, previous close, and the `<min>-<max>` range.
    pub fn with_pattern(pattern: &str, currency: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            currency: currency.to_string(),
        })
    }

    fn split_range(&self, raw: &[u8]) -> Option<(String, String)> {
        let range = String::from_utf8_lossy(raw).replace(&self.currency, "");
        let parts: Vec<&str> = range.split(RANGE_SEPARATOR).collect();
        match parts.as_slice() {
            [min, max] => Some((min.trim().to_string(), max.trim().to_string())),
            _ => None,
        }
    }
}

fn field(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

impl Extract for PatternExtractor {
    fn extract(&self, ticker: &Ticker, body: &[u8]) -> Quote {
        let mut quote = Quote::empty(ticker);

        let Some(caps) = self.pattern.captures(body) else {
            debug!("No quote markup found for {}", ticker);
            return quote;
        };

        if let Some(m) = caps.get(1) {
            quote.price = field(m.as_bytes());
        }
        if let Some(m) = caps.get(2) {
            quote.prev_close = field(m.as_bytes());
        }
        if let Some(m) = caps.get(3) {
            match self.split_range(m.as_bytes()) {
                Some((min, max)) => {
                    quote.min = min;
                    quote.max = max;
                }
                None => debug!("Unexpected day range for {}: {:?}", ticker, field(m.as_bytes())),
            }
        }

        quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<html><body>
<div class="rPF6Lc"><div class="YMlKec fxKbKc">R$150.20</div></div>
<div class="gyFHrc"><span class="mfs7Fc">Previous close</span>
<div class="eYanAe">The last closing price</div>
<div class="P6K39c">R$148.00</div></div>
<div class="gyFHrc"><span class="mfs7Fc">Day range</span>
<div class="P6K39c">R$145.00 - R$151.00</div></div>
</body></html>"#;

    fn ticker(symbol: &str) -> Ticker {
        symbol.parse().unwrap()
    }

    #[test]
    fn extracts_all_fields() {
        let extractor = PatternExtractor::new().unwrap();
        let quote = extractor.extract(&ticker("ITUB4"), SAMPLE.as_bytes());

        assert_eq!(
            quote,
            Quote {
                ticker: "ITUB4".into(),
                min: "145.00".into(),
                price: "150.20".into(),
                max: "151.00".into(),
                prev_close: "148.00".into(),
            }
        );
    }

    #[test]
    fn no_match_yields_blank_quote() {
        let extractor = PatternExtractor::new().unwrap();
        let quote = extractor.extract(&ticker("petr4"), b"<html>Not Found</html>");

        assert_eq!(quote.ticker, "PETR4");
        assert!(quote.is_blank());
    }

    #[test]
    fn range_without_separator_leaves_min_max_empty() {
        let extractor = PatternExtractor::new().unwrap();
        let body = SAMPLE.replace("R$145.00 - R$151.00", "R$145.00");
        let quote = extractor.extract(&ticker("ITUB4"), body.as_bytes());

        assert_eq!(quote.price, "150.20");
        assert_eq!(quote.prev_close, "148.00");
        assert!(quote.min.is_empty());
        assert!(quote.max.is_empty());
    }

    #[test]
    fn range_with_extra_separators_leaves_min_max_empty() {
        let extractor = PatternExtractor::new().unwrap();
        let body = SAMPLE.replace("R$145.00 - R$151.00", "R$145.00 - R$148.00 - R$151.00");
        let quote = extractor.extract(&ticker("ITUB4"), body.as_bytes());

        assert!(quote.min.is_empty());
        assert!(quote.max.is_empty());
    }

    #[test]
    fn tolerates_invalid_utf8_around_the_markup() {
        let extractor = PatternExtractor::new().unwrap();
        let mut body = vec![0xff, 0xfe];
        body.extend_from_slice(SAMPLE.as_bytes());
        body.push(0xc3);
        let quote = extractor.extract(&ticker("ITUB4"), &body);

        assert_eq!(quote.price, "150.20");
    }

    #[test]
    fn custom_pattern() {
        let extractor =
            PatternExtractor::with_pattern(r"p=(\S+) c=(\S+) r=(\S+)", "US$").unwrap();
        let quote = extractor.extract(&ticker("AAPL34"), b"p=10 c=9 r=US$8-US$11");

        assert_eq!(quote.price, "10");
        assert_eq!(quote.prev_close, "9");
        assert_eq!(quote.min, "8");
        assert_eq!(quote.max, "11");
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(matches!(
            PatternExtractor::with_pattern("(", CURRENCY_PREFIX),
            Err(cotacao_common::QuoteError::Pattern(_))
        ));
    }
}
