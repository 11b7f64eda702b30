// ============================================================
// NORMALIZED RECORD SET
// ============================================================
// Uniform in-memory shape produced by ingestion

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{BlobContent, FileCategory};

/// One CSV data line as header -> cell pairs, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMapping {
    entries: Vec<(String, String)>,
}

impl RowMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs, applying the same overwrite rule as `insert`
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        row
    }

    /// Set a cell. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for RowMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parsed CSV content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowSet {
    /// Trimmed header cells of the first line
    pub headers: Vec<String>,

    /// One mapping per data line, in file order
    pub rows: Vec<RowMapping>,
}

impl RowSet {
    /// Zip each record against the headers. Missing trailing cells become
    /// empty strings and cells past the last header are dropped.
    pub fn from_records<I, R, S>(headers: Vec<String>, records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = records
            .into_iter()
            .map(|record| {
                let mut cells = record.into_iter();
                let mut row = RowMapping::new();
                for header in &headers {
                    let value = cells
                        .next()
                        .map(|cell| cell.as_ref().trim().to_string())
                        .unwrap_or_default();
                    row.insert(header.clone(), value);
                }
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Result for an upload with no content at all
    pub fn empty() -> Self {
        Self {
            headers: vec![String::new()],
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Uniform representation of an ingested upload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedRecordSet {
    Json { value: serde_json::Value },
    Rows(RowSet),
    Opaque { content: BlobContent },
}

impl NormalizedRecordSet {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            NormalizedRecordSet::Json { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_rows(&self) -> Option<&RowSet> {
        match self {
            NormalizedRecordSet::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&BlobContent> {
        match self {
            NormalizedRecordSet::Opaque { content } => Some(content),
            _ => None,
        }
    }

    /// Short description for logs and summaries
    pub fn describe(&self) -> String {
        match self {
            NormalizedRecordSet::Json { value } => match value {
                serde_json::Value::Array(items) => format!("JSON array with {} items", items.len()),
                serde_json::Value::Object(map) => format!("JSON object with {} keys", map.len()),
                _ => "JSON scalar".to_string(),
            },
            NormalizedRecordSet::Rows(rows) => format!(
                "{} rows x {} columns",
                rows.rows.len(),
                rows.headers.len()
            ),
            NormalizedRecordSet::Opaque { content } => {
                format!("{} bytes of unparsed content", content.len())
            }
        }
    }
}

/// Upload metadata together with its normalized data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub name: String,

    /// Effective type (declared or derived from the name)
    #[serde(rename = "type")]
    pub file_type: String,

    pub size: u64,

    pub category: FileCategory,

    pub data: NormalizedRecordSet,
}
