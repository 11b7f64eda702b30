use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{display_path, materialize, BlobSource, UploadRequest};
use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::UploadedBlob;

/// Serves payloads registered ahead of time, keyed by path
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

#[async_trait]
impl BlobSource for InMemorySource {
    async fn acquire(&self, request: &UploadRequest) -> Result<UploadedBlob> {
        let raw = self.files.get(&request.path).cloned().ok_or_else(|| {
            IngestionError::ReadFailure(format!(
                "No such upload: {}",
                display_path(&request.path)
            ))
        })?;

        let size = raw.len() as u64;
        Ok(materialize(request, size, raw))
    }
}
