// ============================================================
// INGESTION CONFIGURATION
// ============================================================
// Knobs for CSV grammar, empty uploads and previews

use serde::{Deserialize, Serialize};
use validator::Validate;

/// CSV grammar used for `text/csv` uploads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    /// Split lines on `\n` and fields on `,`. Quoted fields and embedded
    /// commas are not understood.
    #[default]
    Naive,

    /// RFC 4180 quoting and escaping
    Rfc4180,
}

impl std::str::FromStr for CsvDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Ok(CsvDialect::Naive),
            "rfc4180" | "rfc-4180" => Ok(CsvDialect::Rfc4180),
            other => Err(format!("unknown CSV dialect: {}", other)),
        }
    }
}

/// How zero-length uploads are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyFilePolicy {
    /// Parse as usual: CSV gives zero rows, JSON is malformed, opaque
    /// content passes through empty
    #[default]
    EmptyRecordSet,

    /// Fail with `EmptyFile`. JSON/CSV are checked after decoding, so a
    /// file holding only a byte order mark is empty too.
    Reject,
}

/// Configuration for ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IngestionConfig {
    pub csv_dialect: CsvDialect,

    pub empty_file_policy: EmptyFilePolicy,

    /// Refuse files whose extension the picker would not offer
    pub enforce_accepted_extensions: bool,

    /// Rows shown by summaries (default: 5)
    #[validate(range(min = 1, max = 1000))]
    pub preview_rows: usize,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            csv_dialect: CsvDialect::Naive,
            empty_file_policy: EmptyFilePolicy::EmptyRecordSet,
            enforce_accepted_extensions: false,
            preview_rows: 5,
        }
    }
}

impl IngestionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard CSV grammar, empty uploads rejected, extensions enforced
    pub fn strict() -> Self {
        Self {
            csv_dialect: CsvDialect::Rfc4180,
            empty_file_policy: EmptyFilePolicy::Reject,
            enforce_accepted_extensions: true,
            ..Default::default()
        }
    }

    pub fn with_dialect(mut self, dialect: CsvDialect) -> Self {
        self.csv_dialect = dialect;
        self
    }

    pub fn with_empty_file_policy(mut self, policy: EmptyFilePolicy) -> Self {
        self.empty_file_policy = policy;
        self
    }
}
