// ============================================================
// INGESTION NORMALIZER
// ============================================================
// Turn an uploaded blob into a uniform record set

use std::borrow::Cow;

use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::{
    BlobContent, DetectedFormat, EmptyFilePolicy, IngestionConfig, NormalizedRecordSet, RowSet,
    UploadedBlob,
};
use crate::infrastructure::csv::parse_rows;
use crate::infrastructure::text_decoder::decode_text;

/// Normalize with the default configuration
pub fn normalize(blob: &UploadedBlob) -> Result<NormalizedRecordSet> {
    Normalizer::default().normalize(blob)
}

/// Format dispatch over uploaded blobs. Holds configuration only, so the
/// same blob always normalizes to the same result.
pub struct Normalizer {
    config: IngestionConfig,
}

impl Normalizer {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Parse the blob according to its detected format
    pub fn normalize(&self, blob: &UploadedBlob) -> Result<NormalizedRecordSet> {
        let format = blob.detected_format();
        tracing::debug!(name = %blob.name, %format, "Normalizing upload");

        match format {
            DetectedFormat::Json => {
                let text = text_of(&blob.content);
                self.check_empty(blob, text.is_empty())?;
                let value = serde_json::from_str(&text)
                    .map_err(|e| IngestionError::MalformedJson(e.to_string()))?;
                Ok(NormalizedRecordSet::Json { value })
            }
            DetectedFormat::Csv => {
                let text = text_of(&blob.content);
                self.check_empty(blob, text.is_empty())?;
                let rows = if text.is_empty() {
                    RowSet::empty()
                } else {
                    parse_rows(&text, self.config.csv_dialect)?
                };
                Ok(NormalizedRecordSet::Rows(rows))
            }
            DetectedFormat::Opaque => {
                self.check_empty(blob, blob.is_empty())?;
                Ok(NormalizedRecordSet::Opaque {
                    content: blob.content.clone(),
                })
            }
        }
    }

    /// Emptiness is judged on the decoded text for JSON/CSV, so a BOM-only
    /// file counts as empty
    fn check_empty(&self, blob: &UploadedBlob, empty: bool) -> Result<()> {
        if empty && self.config.empty_file_policy == EmptyFilePolicy::Reject {
            return Err(IngestionError::EmptyFile(blob.name.clone()));
        }
        Ok(())
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}

fn text_of(content: &BlobContent) -> Cow<'_, str> {
    match content {
        BlobContent::Text(text) => Cow::Borrowed(text.strip_prefix('\u{FEFF}').unwrap_or(text)),
        BlobContent::Bytes(bytes) => Cow::Owned(decode_text(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingest::{CsvDialect, RowMapping};
    use serde_json::json;

    fn csv(text: &str) -> UploadedBlob {
        UploadedBlob::text("data.csv", "text/csv", text)
    }

    #[test]
    fn test_json_matches_direct_parse() {
        let text = r#"{"rows":[{"a":1},{"a":2}],"ok":true,"n":null}"#;
        let blob = UploadedBlob::text("data.json", "application/json", text);

        let result = normalize(&blob).unwrap();
        let direct: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(result, NormalizedRecordSet::Json { value: direct });
    }

    #[test]
    fn test_malformed_json() {
        let blob = UploadedBlob::text("data.json", "application/json", r#"{"a":"#);
        assert!(matches!(normalize(&blob), Err(IngestionError::MalformedJson(_))));
    }

    #[test]
    fn test_json_from_bytes() {
        let blob = UploadedBlob::bytes("data.json", "application/json", b"\xEF\xBB\xBF[1,2]".to_vec());
        assert_eq!(
            normalize(&blob).unwrap().as_json(),
            Some(&json!([1, 2]))
        );
    }

    #[test]
    fn test_missing_trailing_field_filled_empty() {
        let result = normalize(&csv("a,b,c\n1,2")).unwrap();
        let rows = result.as_rows().unwrap();
        assert_eq!(
            rows.rows,
            vec![RowMapping::from_pairs([("a", "1"), ("b", "2"), ("c", "")])]
        );
    }

    #[test]
    fn test_headers_and_cells_trimmed() {
        let result = normalize(&csv("h1,h2\n x , y \n")).unwrap();
        assert_eq!(
            result.as_rows().unwrap().rows,
            vec![RowMapping::from_pairs([("h1", "x"), ("h2", "y")])]
        );
    }

    #[test]
    fn test_csv_detected_by_name() {
        let blob = UploadedBlob::text("export.csv", "", "a\n1");
        assert_eq!(normalize(&blob).unwrap().as_rows().unwrap().len(), 1);
    }

    #[test]
    fn test_opaque_text_unchanged() {
        let blob = UploadedBlob::text("notes.txt", "text/plain", "hello");
        assert_eq!(
            normalize(&blob).unwrap(),
            NormalizedRecordSet::Opaque {
                content: BlobContent::Text("hello".to_string())
            }
        );
    }

    #[test]
    fn test_spreadsheet_passes_through_as_bytes() {
        let bytes = vec![0x50, 0x4b, 0x03, 0x04];
        let blob = UploadedBlob::bytes("book.xlsx", "application/vnd.ms-excel", bytes.clone());
        assert_eq!(
            normalize(&blob).unwrap().as_opaque(),
            Some(&BlobContent::Bytes(bytes))
        );
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::default();
        for blob in [
            csv("a,b\n1,2\n3"),
            UploadedBlob::text("d.json", "application/json", "[1,{\"x\":2}]"),
            UploadedBlob::text("d.bin", "", "raw"),
        ] {
            assert_eq!(
                normalizer.normalize(&blob).unwrap(),
                normalizer.normalize(&blob).unwrap()
            );
        }
    }

    // Empty uploads default to an empty record set rather than an error
    #[test]
    fn test_empty_csv_yields_zero_rows() {
        let result = normalize(&csv("")).unwrap();
        let rows = result.as_rows().unwrap();
        assert_eq!(rows.headers, vec![""]);
        assert!(rows.rows.is_empty());
    }

    #[test]
    fn test_empty_json_is_malformed_by_default() {
        let blob = UploadedBlob::text("d.json", "application/json", "");
        assert!(matches!(normalize(&blob), Err(IngestionError::MalformedJson(_))));
    }

    #[test]
    fn test_empty_rejected_when_configured() {
        let normalizer = Normalizer::new(
            IngestionConfig::default().with_empty_file_policy(EmptyFilePolicy::Reject),
        );
        let err = normalizer.normalize(&csv("")).unwrap_err();
        assert_eq!(err, IngestionError::EmptyFile("data.csv".to_string()));
    }

    #[test]
    fn test_leading_bom_stripped_from_text() {
        let result = normalize(&csv("\u{FEFF}a,b\n1,2")).unwrap();
        let rows = result.as_rows().unwrap();
        assert_eq!(rows.headers, vec!["a", "b"]);
        assert_eq!(rows.rows, vec![RowMapping::from_pairs([("a", "1"), ("b", "2")])]);

        let from_bytes = normalize(&UploadedBlob::bytes(
            "data.csv",
            "text/csv",
            b"\xEF\xBB\xBFa,b\n1,2".to_vec(),
        ))
        .unwrap();
        assert_eq!(result, from_bytes);
    }

    #[test]
    fn test_bom_only_file_rejected_when_configured() {
        let normalizer = Normalizer::new(
            IngestionConfig::default().with_empty_file_policy(EmptyFilePolicy::Reject),
        );
        let blob = UploadedBlob::bytes("data.csv", "text/csv", b"\xEF\xBB\xBF".to_vec());
        assert_eq!(
            normalizer.normalize(&blob).unwrap_err(),
            IngestionError::EmptyFile("data.csv".to_string())
        );

        let json = UploadedBlob::text("d.json", "application/json", "\u{FEFF}");
        assert!(matches!(
            normalizer.normalize(&json),
            Err(IngestionError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_rfc4180_dialect() {
        let normalizer = Normalizer::new(IngestionConfig::default().with_dialect(CsvDialect::Rfc4180));
        let result = normalizer
            .normalize(&csv("name,city\nAda,\"London, UK\"\n"))
            .unwrap();
        assert_eq!(
            result.as_rows().unwrap().rows,
            vec![RowMapping::from_pairs([("name", "Ada"), ("city", "London, UK")])]
        );
    }

    #[test]
    fn test_naive_dialect_splits_quoted_commas() {
        let result = normalize(&csv("name,city\nAda,\"London, UK\"\n")).unwrap();
        assert_eq!(result.as_rows().unwrap().rows[0].get("city"), Some("\"London"));
    }
}
