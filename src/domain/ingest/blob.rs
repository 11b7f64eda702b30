// ============================================================
// UPLOADED BLOB
// ============================================================
// One uploaded file, fully materialized in memory

use serde::{Deserialize, Serialize};

use super::DetectedFormat;

/// Raw payload of an upload, as text or as a byte buffer depending on
/// how it was read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encoding", content = "value", rename_all = "lowercase")]
pub enum BlobContent {
    Text(String),
    Bytes(Vec<u8>),
}

impl BlobContent {
    /// Length of the payload in bytes
    pub fn len(&self) -> usize {
        match self {
            BlobContent::Text(text) => text.len(),
            BlobContent::Bytes(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A file selected or dropped by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedBlob {
    /// File name as reported by the picker (no directory)
    pub name: String,

    /// MIME type declared by the picker; may be empty
    pub declared_type: String,

    /// Size reported for the file
    pub size_bytes: u64,

    /// Materialized content
    pub content: BlobContent,
}

impl UploadedBlob {
    /// Build a blob holding text content
    pub fn text(name: impl Into<String>, declared_type: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            size_bytes: text.len() as u64,
            content: BlobContent::Text(text),
        }
    }

    /// Build a blob holding a byte buffer
    pub fn bytes(name: impl Into<String>, declared_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            size_bytes: bytes.len() as u64,
            content: BlobContent::Bytes(bytes),
        }
    }

    pub fn detected_format(&self) -> DetectedFormat {
        DetectedFormat::detect(&self.declared_type, &self.name)
    }

    pub fn effective_type(&self) -> String {
        super::effective_type(&self.declared_type, &self.name)
    }

    /// Whether the materialized content is zero-length
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
