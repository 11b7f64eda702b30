// ============================================================
// CSV PARSER
// ============================================================
// RFC 4180 parsing with quoting, escaping and ragged rows

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::RowSet;

/// Standard-grammar CSV parser
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<RowSet> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| IngestionError::MalformedCsv(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                IngestionError::MalformedCsv(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            records.push(record);
        }

        Ok(RowSet::from_records(headers, records.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingest::RowMapping;

    #[test]
    fn test_parse_simple_csv() {
        let rows = CsvParser::new()
            .parse_content("name,age,city\nAlice,30,NYC\nBob,25,LA")
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows.headers, vec!["name", "age", "city"]);
        assert_eq!(rows.rows[0].get("name"), Some("Alice"));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let rows = CsvParser::new()
            .parse_content("city,note\n\"Paris, FR\",\"said \"\"hi\"\"\"\n")
            .unwrap();

        assert_eq!(
            rows.rows,
            vec![RowMapping::from_pairs([("city", "Paris, FR"), ("note", "said \"hi\"")])]
        );
    }

    #[test]
    fn test_embedded_newline() {
        let rows = CsvParser::new().parse_content("a,b\n\"line1\nline2\",x").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows[0].get("a"), Some("line1\nline2"));
    }

    #[test]
    fn test_ragged_rows_follow_header_count() {
        let rows = CsvParser::new().parse_content("a,b,c\n1,2\n1,2,3,4").unwrap();
        assert_eq!(rows.rows[0], RowMapping::from_pairs([("a", "1"), ("b", "2"), ("c", "")]));
        assert_eq!(rows.rows[1], RowMapping::from_pairs([("a", "1"), ("b", "2"), ("c", "3")]));
    }

    #[test]
    fn test_unterminated_quote_is_lenient() {
        let rows = CsvParser::new().parse_content("a,b\n\"open,x\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows[0].get("a"), Some("open,x"));
        assert_eq!(rows.rows[0].get("b"), Some(""));
    }

    #[test]
    fn test_custom_delimiter() {
        let rows = CsvParser::new()
            .with_delimiter(b';')
            .parse_content("a;b\n 1 ; 2 ")
            .unwrap();
        assert_eq!(rows.rows[0], RowMapping::from_pairs([("a", "1"), ("b", "2")]));
    }
}
