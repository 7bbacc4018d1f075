//! JSON output: one compact array followed by a newline.
use std::io::Write;

use cotacao_common::{Quote, Result};

/// Writes `quotes` as a JSON array in the order given.
pub fn render<W: Write>(quotes: &[Quote], out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, quotes)?;
    writeln!(out)?;
    Ok(())
}
