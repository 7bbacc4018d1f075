//! Percentage change between the current price and the previous close.
use super::RESET;

/// ANSI red foreground, used for falling prices.
pub const RED: &str = "\x1b[31m";

/// `(price - prev_close) * 100 / prev_close`.
///
/// `None` when either side is missing, unparsable or zero.
pub fn percent_change(price: &str, prev_close: &str) -> Option<f64> {
    let price = parse_price(price)?;
    let prev_close = parse_price(prev_close)?;
    if price == 0.0 || prev_close == 0.0 {
        return None;
    }
    Some((price - prev_close) * 100.0 / prev_close)
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Table cell for a change: `"0"` when unknown, red when negative.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        None => "0".to_string(),
        Some(v) if v < 0.0 => format!("{RED}{v}%{RESET}"),
        Some(v) => format!("{v}%"),
    }
}
