// ============================================================
// FORMAT DETECTION
// ============================================================
// Resolve the parse path, effective type and category of an upload

use serde::{Deserialize, Serialize};

pub const JSON_MIME: &str = "application/json";
pub const CSV_MIME: &str = "text/csv";
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Extensions offered by the file picker. Advisory only: content is
/// never sniffed beyond the JSON/CSV checks.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".csv", ".xlsx", ".xls", ".json"];

/// Parse path chosen for an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedFormat {
    Json,
    Csv,
    /// Anything else, including spreadsheet binaries
    Opaque,
}

impl DetectedFormat {
    /// Detect the format from the declared MIME type, falling back to the
    /// `.csv` suffix of the file name
    pub fn detect(declared_type: &str, name: &str) -> Self {
        let essence = mime_essence(declared_type);

        if essence == JSON_MIME {
            DetectedFormat::Json
        } else if essence == CSV_MIME || has_csv_suffix(name) {
            DetectedFormat::Csv
        } else {
            DetectedFormat::Opaque
        }
    }

    /// Whether the upload should be read as text rather than bytes
    pub fn reads_as_text(&self) -> bool {
        matches!(self, DetectedFormat::Json | DetectedFormat::Csv)
    }
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::Json => write!(f, "JSON"),
            DetectedFormat::Csv => write!(f, "CSV"),
            DetectedFormat::Opaque => write!(f, "Opaque"),
        }
    }
}

/// Coarse grouping used for icons and source listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Spreadsheet,
    Json,
    Generic,
}

impl FileCategory {
    /// Classify by substring of a MIME type
    pub fn from_type(file_type: &str) -> Self {
        let lower = file_type.to_lowercase();
        if lower.contains("csv") || lower.contains("excel") || lower.contains("spreadsheet") {
            FileCategory::Spreadsheet
        } else if lower.contains("json") {
            FileCategory::Json
        } else {
            FileCategory::Generic
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileCategory::Spreadsheet => write!(f, "Spreadsheet"),
            FileCategory::Json => write!(f, "JSON"),
            FileCategory::Generic => write!(f, "File"),
        }
    }
}

/// Type reported for an upload: the declared type when present, else a
/// name-derived fallback
pub fn effective_type(declared_type: &str, name: &str) -> String {
    let declared = declared_type.trim();
    if !declared.is_empty() {
        declared.to_string()
    } else if has_csv_suffix(name) {
        CSV_MIME.to_string()
    } else {
        OCTET_STREAM_MIME.to_string()
    }
}

/// MIME type a browser would assign from the file extension. Unknown
/// extensions yield an empty string.
pub fn infer_declared_type(name: &str) -> String {
    let lower = name.to_lowercase();
    let mime = match lower.rsplit_once('.').map(|(_, ext)| ext) {
        Some("json") => JSON_MIME,
        Some("csv") => CSV_MIME,
        Some("xlsx") => XLSX_MIME,
        Some("xls") => XLS_MIME,
        _ => "",
    };
    mime.to_string()
}

/// Whether the picker filter would offer this file
pub fn is_accepted(name: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// `type/subtype` part of a MIME type, lowercased, parameters removed
fn mime_essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or("").trim().to_lowercase()
}

fn has_csv_suffix(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}
