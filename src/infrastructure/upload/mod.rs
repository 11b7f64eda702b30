pub mod file_system;
pub mod in_memory;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::ingest::{infer_declared_type, BlobContent, DetectedFormat, UploadedBlob};
use crate::infrastructure::text_decoder::decode_text;

pub use file_system::FileSystemSource;
pub use in_memory::InMemorySource;

/// A file the user picked or dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub path: PathBuf,

    /// MIME type reported by the picker; inferred from the name when absent
    pub declared_type: Option<String>,
}

impl UploadRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            declared_type: None,
        }
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// Final path component, or the whole path when there is none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn resolved_declared_type(&self) -> String {
        match &self.declared_type {
            Some(declared) => declared.clone(),
            None => infer_declared_type(&self.file_name()),
        }
    }
}

/// Materializes uploads into memory
#[async_trait]
pub trait BlobSource: Send + Sync {
    async fn acquire(&self, request: &UploadRequest) -> Result<UploadedBlob>;
}

/// Build a blob from raw bytes, reading JSON/CSV as text and everything
/// else as a byte buffer
pub(crate) fn materialize(request: &UploadRequest, size_bytes: u64, raw: Vec<u8>) -> UploadedBlob {
    let name = request.file_name();
    let declared_type = request.resolved_declared_type();
    let format = DetectedFormat::detect(&declared_type, &name);

    let content = if format.reads_as_text() {
        BlobContent::Text(decode_text(&raw))
    } else {
        BlobContent::Bytes(raw)
    };

    tracing::debug!(%name, %declared_type, %format, "Materialized upload");

    UploadedBlob {
        name,
        declared_type,
        size_bytes,
        content,
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_infers_declared_type() {
        let request = UploadRequest::new("/tmp/uploads/data.json");
        assert_eq!(request.file_name(), "data.json");
        assert_eq!(request.resolved_declared_type(), "application/json");

        let explicit = request.with_declared_type("text/plain");
        assert_eq!(explicit.resolved_declared_type(), "text/plain");
    }

    #[test]
    fn test_materialize_read_modes() {
        let csv = materialize(&UploadRequest::new("a.csv"), 3, b"a,b".to_vec());
        assert_eq!(csv.content, BlobContent::Text("a,b".to_string()));

        let xlsx = materialize(&UploadRequest::new("a.xlsx"), 2, vec![0x50, 0x4b]);
        assert_eq!(xlsx.content, BlobContent::Bytes(vec![0x50, 0x4b]));
        assert_eq!(xlsx.size_bytes, 2);
    }
}
