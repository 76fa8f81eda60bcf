//! FSE decoding table rows and their source-literal rendering.
//!
//! Input rows are copied by hand from a reference table as four whitespace
//! separated columns: state, symbol, number of bits, baseline. Output rows
//! reorder them into `0x{state:02x},s{symbol},0x{baseline:02x},{bits}`,
//! the form expected by the decoder's table tests.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;
use tracing::debug;

use crate::config::{FormatterConfig, HexWidth};
use crate::error::{DevtoolsError, Result};

/// Column titles written when a header is requested.
pub const HEADER: [&str; 4] = ["State", "Sym", "BL", "NB"];

/// Predefined offset-code decoding table (accuracy log 5), as copied.
pub const OFFSET_CODE_TABLE: &str = "0 	0 	5 	0
1 	6 	4 	0
2 	9 	5 	0
3 	15 	5 	0
4 	21 	5 	0
5 	3 	5 	0
6 	7 	4 	0
7 	12 	5 	0
8 	18 	5 	0
9 	23 	5 	0
10 	5 	5 	0
11 	8 	4 	0
12 	14 	5 	0
13 	20 	5 	0
14 	2 	5 	0
15 	7 	4 	16
16 	11 	5 	0
17 	17 	5 	0
18 	22 	5 	0
19 	4 	5 	0
20 	8 	4 	16
21 	13 	5 	0
22 	19 	5 	0
23 	1 	5 	0
24 	6 	4 	16
25 	10 	5 	0
26 	16 	5 	0
27 	28 	5 	0
28 	27 	5 	0
29 	26 	5 	0
30 	25 	5 	0
31 	24 	5 	0
";

/// One decoding table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub state: u32,
    pub symbol: u32,
    /// Bits read to reach the next state.
    pub num_bits: u32,
    pub baseline: u32,
}

impl TableRow {
    pub fn new(state: u32, symbol: u32, num_bits: u32, baseline: u32) -> Self {
        Self {
            state,
            symbol,
            num_bits,
            baseline,
        }
    }

    /// Whether state and baseline both render in two hex digits.
    pub fn fits_byte(&self) -> bool {
        self.state <= 0xff && self.baseline <= 0xff
    }

    fn fields(&self) -> [String; 4] {
        [
            format!("0x{:02x}", self.state),
            format!("s{}", self.symbol),
            format!("0x{:02x}", self.baseline),
            self.num_bits.to_string(),
        ]
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields().join(","))
    }
}

/// Parse one input line. `line` is the 1-based line number used in errors.
pub fn parse_row(line: usize, text: &str) -> Result<TableRow> {
    let columns: Vec<&str> = text.split_whitespace().collect();
    if columns.len() != 4 {
        return Err(DevtoolsError::malformed_row(
            line,
            format!("expected 4 fields, found {}", columns.len()),
        ));
    }

    let mut values = [0u32; 4];
    for (value, column) in values.iter_mut().zip(&columns) {
        *value = column.parse().map_err(|e: std::num::ParseIntError| {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow => format!("{column:?} is larger than {}", u32::MAX),
                _ => format!("{column:?} is not a non-negative integer"),
            };
            DevtoolsError::malformed_row(line, reason)
        })?;
    }
    let [state, symbol, num_bits, baseline] = values;
    Ok(TableRow::new(state, symbol, num_bits, baseline))
}

/// Parse a whole table block. Blank lines before the first row and after the
/// last are ignored; every line between must be a row. Errors carry the
/// line's position in `text`.
pub fn parse_table(text: &str) -> Result<Vec<TableRow>> {
    let lines: Vec<&str> = text.lines().collect();
    let is_row = |l: &&str| !l.trim().is_empty();
    let rows = match (lines.iter().position(is_row), lines.iter().rposition(is_row)) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .enumerate()
            .map(|(i, l)| parse_row(first + i + 1, l))
            .collect::<Result<Vec<_>>>()?,
        _ => Vec::new(),
    };
    debug!(rows = rows.len(), "parsed table");
    Ok(rows)
}

/// Render one row, widening the hex fields past two digits when needed.
pub fn format_row(row: &TableRow) -> String {
    row.to_string()
}

/// Under [`HexWidth::Strict`], fail on the first row whose state or baseline
/// needs more than two hex digits.
pub fn check_width(rows: &[TableRow], width: HexWidth) -> Result<()> {
    if width == HexWidth::Widen {
        return Ok(());
    }
    match rows.iter().position(|row| !row.fits_byte()) {
        Some(i) => Err(DevtoolsError::malformed_row(
            i + 1,
            format!(
                "state {} or baseline {} does not fit in two hex digits",
                rows[i].state, rows[i].baseline
            ),
        )),
        None => Ok(()),
    }
}

/// Render rows as newline terminated lines, in input order.
pub fn format_table(rows: &[TableRow], config: &FormatterConfig) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    check_width(rows, config.hex_width)?;
    if config.header {
        wtr.write_record(HEADER)?;
    }
    for row in rows {
        wtr.write_record(row.fields())?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| DevtoolsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Rows as a pretty printed JSON array.
pub fn rows_to_json(rows: &[TableRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
