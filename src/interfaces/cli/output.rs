use std::borrow::Cow;
use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::domain::ingest::{
    BlobContent, FileCategory, NormalizedRecordSet, Notification, RowSet, UploadedFile,
};
use crate::shared::format_file_size;

/// Envelope printed by `ingest`
#[derive(Debug, Serialize)]
pub struct JsonOut<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UploadedFileOut<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub notification: &'a Notification,
}

#[derive(Debug, Serialize)]
pub struct UploadedFileOut<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub file_type: &'a str,
    pub size: u64,
    pub size_label: String,
    pub category: FileCategory,
    pub data: DataOut<'a>,
}

impl<'a> From<&'a UploadedFile> for UploadedFileOut<'a> {
    fn from(file: &'a UploadedFile) -> Self {
        Self {
            name: &file.name,
            file_type: &file.file_type,
            size: file.size,
            size_label: format_file_size(file.size),
            category: file.category,
            data: DataOut::from(&file.data),
        }
    }
}

/// Record set with opaque bytes base64-encoded
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataOut<'a> {
    Json {
        value: &'a serde_json::Value,
    },
    Rows(&'a RowSet),
    Opaque {
        encoding: &'static str,
        value: Cow<'a, str>,
    },
}

impl<'a> From<&'a NormalizedRecordSet> for DataOut<'a> {
    fn from(set: &'a NormalizedRecordSet) -> Self {
        match set {
            NormalizedRecordSet::Json { value } => DataOut::Json { value },
            NormalizedRecordSet::Rows(rows) => DataOut::Rows(rows),
            NormalizedRecordSet::Opaque { content } => match content {
                BlobContent::Text(text) => DataOut::Opaque {
                    encoding: "text",
                    value: Cow::Borrowed(text),
                },
                BlobContent::Bytes(bytes) => DataOut::Opaque {
                    encoding: "base64",
                    value: Cow::Owned(STANDARD.encode(bytes)),
                },
            },
        }
    }
}

/// Plain-text summary printed by `inspect`
pub fn render_summary(file: &UploadedFile, preview_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", file.name, format_file_size(file.size));
    let _ = writeln!(out, "type: {}", file.file_type);
    let _ = writeln!(out, "category: {}", file.category);
    let _ = writeln!(out, "data: {}", file.data.describe());

    if let Some(rows) = file.data.as_rows() {
        let _ = writeln!(out, "columns: {}", rows.headers.join(", "));
        for (index, row) in rows.rows.iter().take(preview_rows).enumerate() {
            let cells: Vec<String> = row.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            let _ = writeln!(out, "  {}. {}", index + 1, cells.join(", "));
        }
        if rows.rows.len() > preview_rows {
            let _ = writeln!(out, "  ... {} more", rows.rows.len() - preview_rows);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingest::RowMapping;

    fn rows_file(count: usize) -> UploadedFile {
        let rows = (0..count)
            .map(|i| RowMapping::from_pairs([("id", i.to_string())]))
            .collect();
        UploadedFile {
            name: "ids.csv".to_string(),
            file_type: "text/csv".to_string(),
            size: 2048,
            category: FileCategory::Spreadsheet,
            data: NormalizedRecordSet::Rows(RowSet {
                headers: vec!["id".to_string()],
                rows,
            }),
        }
    }

    #[test]
    fn test_opaque_bytes_are_base64() {
        let set = NormalizedRecordSet::Opaque {
            content: BlobContent::Bytes(vec![0x50, 0x4b, 0x03, 0x04]),
        };
        let json = serde_json::to_value(DataOut::from(&set)).unwrap();
        assert_eq!(json["kind"], "opaque");
        assert_eq!(json["encoding"], "base64");
        assert_eq!(json["value"], "UEsDBA==");
    }

    #[test]
    fn test_file_output_fields() {
        let file = rows_file(1);
        let json = serde_json::to_value(UploadedFileOut::from(&file)).unwrap();
        assert_eq!(json["type"], "text/csv");
        assert_eq!(json["size_label"], "2.0 KB");
        assert_eq!(json["category"], "spreadsheet");
        assert_eq!(json["data"]["rows"][0]["id"], "0");
    }

    #[test]
    fn test_summary_preview_is_capped() {
        let summary = render_summary(&rows_file(4), 2);
        assert!(summary.starts_with("ids.csv (2.0 KB)"));
        assert!(summary.contains("columns: id"));
        assert!(summary.contains("  2. id=1"));
        assert!(!summary.contains("  3. id=2"));
        assert!(summary.contains("... 2 more"));
    }
}
