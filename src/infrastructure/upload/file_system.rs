use async_trait::async_trait;

use super::{display_path, materialize, BlobSource, UploadRequest};
use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::UploadedBlob;

/// Reads uploads from the local file system
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource;

impl FileSystemSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BlobSource for FileSystemSource {
    async fn acquire(&self, request: &UploadRequest) -> Result<UploadedBlob> {
        let path = display_path(&request.path);

        let metadata = tokio::fs::metadata(&request.path).await.map_err(|e| {
            IngestionError::ReadFailure(format!("Failed to open {}: {}", path, e))
        })?;

        if !metadata.is_file() {
            return Err(IngestionError::ReadFailure(format!("Not a regular file: {}", path)));
        }

        let raw = tokio::fs::read(&request.path).await.map_err(|e| {
            IngestionError::ReadFailure(format!("Failed to read {}: {}", path, e))
        })?;

        let expected = metadata.len();
        if raw.len() as u64 != expected {
            return Err(IngestionError::ReadFailure(format!(
                "Truncated read of {}: expected {} bytes, got {}",
                path,
                expected,
                raw.len()
            )));
        }

        tracing::info!(%path, size = expected, "Read upload from disk");
        Ok(materialize(request, expected, raw))
    }
}
