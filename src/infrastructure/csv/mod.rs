// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Line splitting for the naive dialect, RFC 4180 reading via `csv`

mod csv_parser;
mod line_splitter;

pub use csv_parser::CsvParser;
pub use line_splitter::LineSplitter;

use crate::domain::error::Result;
use crate::domain::ingest::{CsvDialect, RowSet};

/// Parse CSV text with the requested grammar
pub fn parse_rows(content: &str, dialect: CsvDialect) -> Result<RowSet> {
    match dialect {
        CsvDialect::Naive => Ok(LineSplitter::new().parse_content(content)),
        CsvDialect::Rfc4180 => CsvParser::new().parse_content(content),
    }
}
