// ============================================================
// LINE SPLITTER
// ============================================================
// Comma split with no quoting, the behavior of the upload widget

use crate::domain::ingest::RowSet;

/// Naive CSV splitter.
///
/// Lines are separated by `\n` and fields by `,`. Quotes have no special
/// meaning, so `"a,b"` is two fields. Headers and cells are trimmed, which
/// also removes the `\r` of CRLF files.
pub struct LineSplitter {
    delimiter: char,
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> RowSet {
        let mut lines = content.split('\n');

        // `split` always yields at least one item, so an empty upload has
        // a single empty header
        let headers: Vec<String> = lines
            .next()
            .unwrap_or("")
            .split(self.delimiter)
            .map(|h| h.trim().to_string())
            .collect();

        let records = lines
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(self.delimiter));

        RowSet::from_records(headers, records)
    }
}
