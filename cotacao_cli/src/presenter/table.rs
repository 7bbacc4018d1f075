//! Terminal table output.
//!
//! No borders; each cell gets a two-space left padding and columns are
//! aligned on visible width (escape sequences do not count). The header has
//! a blue background and rows alternate green and yellow with black text.
//! The change column has no header label.
use std::io::{self, Write};

use cotacao_common::Quote;

use super::RESET;
use super::change::{format_change, percent_change};

const HEADER: [&str; 5] = ["Ticker", "Price", "Min", "Max", "PrevClose"];

const COLUMNS: usize = 6;

/// Width price fields are right-aligned to.
const PRICE_WIDTH: usize = 8;

const CELL_PADDING: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Header,
    Row,
    RowAlternate,
}

impl LineStyle {
    fn ansi(self) -> &'static str {
        match self {
            LineStyle::Header => "\x1b[44m",
            LineStyle::Row => "\x1b[42;30m",
            LineStyle::RowAlternate => "\x1b[43;30m",
        }
    }

    fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            LineStyle::Row
        } else {
            LineStyle::RowAlternate
        }
    }
}

/// Cells for one quote: ticker, price, min, max, previous close, change.
pub fn row_cells(quote: &Quote) -> [String; COLUMNS] {
    [
        quote.ticker.clone(),
        format!("{:>PRICE_WIDTH$}", quote.price),
        format!("{:>PRICE_WIDTH$}", quote.min),
        format!("{:>PRICE_WIDTH$}", quote.max),
        format!("{:>PRICE_WIDTH$}", quote.prev_close),
        format_change(percent_change(&quote.price, &quote.prev_close)),
    ]
}

/// Writes `quotes` in the order given, surrounded by blank lines.
pub fn render<W: Write>(quotes: &[Quote], out: &mut W) -> io::Result<()> {
    let mut header: [String; COLUMNS] = Default::default();
    for (cell, label) in header.iter_mut().zip(HEADER) {
        *cell = label.to_string();
    }
    let rows: Vec<[String; COLUMNS]> = quotes.iter().map(row_cells).collect();

    let mut widths = [0usize; COLUMNS];
    for line in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(visible_width(cell));
        }
    }

    writeln!(out)?;
    write_line(out, &header, &widths, LineStyle::Header)?;
    for (index, row) in rows.iter().enumerate() {
        write_line(out, row, &widths, LineStyle::for_row(index))?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_line<W: Write>(
    out: &mut W,
    cells: &[String; COLUMNS],
    widths: &[usize; COLUMNS],
    style: LineStyle,
) -> io::Result<()> {
    for (cell, width) in cells.iter().zip(widths) {
        let fill = width.saturating_sub(visible_width(cell));
        write!(
            out,
            "{}{}{}{:fill$}{}",
            style.ansi(),
            CELL_PADDING,
            cell,
            "",
            RESET,
        )?;
    }
    writeln!(out)
}

/// Character count ignoring `ESC [ ... m` sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::change::RED;

    fn quote(ticker: &str, min: &str, price: &str, max: &str, prev_close: &str) -> Quote {
        Quote {
            ticker: ticker.into(),
            min: min.into(),
            price: price.into(),
            max: max.into(),
            prev_close: prev_close.into(),
        }
    }

    fn rendered(quotes: &[Quote]) -> Vec<String> {
        let mut out = Vec::new();
        render(quotes, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn price_cells_are_right_aligned_to_eight() {
        let cells = row_cells(&quote("ITUB4", "145.00", "150.20", "151.00", "148.00"));
        assert_eq!(cells[0], "ITUB4");
        assert_eq!(cells[1], "  150.20");
        assert_eq!(cells[2], "  145.00");
        assert_eq!(cells[3], "  151.00");
        assert_eq!(cells[4], "  148.00");
        assert!(cells[5].ends_with('%'));
    }

    #[test]
    fn blank_quote_renders_empty_cells() {
        let cells = row_cells(&quote("PETR4", "", "", "", ""));
        assert_eq!(cells[1], " ".repeat(PRICE_WIDTH));
        assert_eq!(cells[5], "0");
    }

    #[test]
    fn layout() {
        let lines = rendered(&[
            quote("AAPL34", "145.00", "150.20", "151.00", "148.00"),
            quote("BBDC4", "13.00", "14.00", "15.00", "14.50"),
            quote("TSLA34", "", "", "", ""),
        ]);

        assert_eq!(lines.len(), 6);
        assert!(lines[0].is_empty());
        assert!(lines[5].is_empty());

        let header = strip_ansi(&lines[1]);
        assert!(header.starts_with("  Ticker"));
        assert!(header.contains("PrevClose"));

        assert!(strip_ansi(&lines[2]).starts_with("  AAPL34"));
        assert!(strip_ansi(&lines[3]).starts_with("  BBDC4 "));
        assert!(strip_ansi(&lines[4]).starts_with("  TSLA34"));
    }

    #[test]
    fn header_and_rows_use_their_colors() {
        let lines = rendered(&[
            quote("AAPL34", "", "1", "", "1"),
            quote("BBDC4", "", "1", "", "1"),
            quote("TSLA34", "", "1", "", "1"),
        ]);

        assert!(lines[1].starts_with(LineStyle::Header.ansi()));
        assert!(lines[2].starts_with(LineStyle::Row.ansi()));
        assert!(lines[3].starts_with(LineStyle::RowAlternate.ansi()));
        assert!(lines[4].starts_with(LineStyle::Row.ansi()));
    }

    #[test]
    fn only_falling_prices_are_red() {
        let lines = rendered(&[
            quote("AAPL34", "", "150.20", "", "148.00"),
            quote("BBDC4", "", "140", "", "148"),
        ]);

        assert!(!lines[2].contains(RED));
        assert!(lines[3].contains(RED));
    }

    #[test]
    fn columns_line_up_despite_escape_codes() {
        let lines = rendered(&[
            quote("AAPL34", "", "150.20", "", "148.00"),
            quote("BBDC4", "", "140", "", "148"),
        ]);
        let widths: Vec<usize> = lines[1..4]
            .iter()
            .map(|line| strip_ansi(line).chars().count())
            .collect();

        assert_eq!(widths[0], widths[1]);
        assert_eq!(widths[1], widths[2]);
    }

    #[test]
    fn visible_width_skips_escapes() {
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width(&format!("{RED}-1.5%{RESET}")), 5);
    }

    #[test]
    fn empty_table_still_has_header() {
        let lines = rendered(&[]);
        assert_eq!(lines.len(), 3);
        assert!(strip_ansi(&lines[1]).contains("Ticker"));
    }
}
