use std::time::Instant;

use crate::application::use_cases::normalizer::Normalizer;
use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::{
    is_accepted, FileCategory, IngestionConfig, Notification, UploadedFile,
};
use crate::infrastructure::upload::{BlobSource, UploadRequest};

/// Acquire an upload, normalize it and release it
pub struct FileIngestionUseCase {
    normalizer: Normalizer,
}

impl FileIngestionUseCase {
    pub fn new(config: IngestionConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    pub fn config(&self) -> &IngestionConfig {
        self.normalizer.config()
    }

    pub async fn ingest<S>(&self, source: &S, request: &UploadRequest) -> Result<UploadedFile>
    where
        S: BlobSource + ?Sized,
    {
        let start = Instant::now();
        let name = request.file_name();

        if !is_accepted(&name) {
            if self.config().enforce_accepted_extensions {
                return Err(IngestionError::ValidationError(format!(
                    "Unsupported file type: {}",
                    name
                )));
            }
            tracing::warn!(%name, "File extension is not one of the accepted upload types");
        }

        tracing::info!(%name, "Starting import");

        let blob = source.acquire(request).await?;
        let data = self.normalizer.normalize(&blob)?;

        let file_type = blob.effective_type();
        let uploaded = UploadedFile {
            category: FileCategory::from_type(&file_type),
            name: blob.name,
            file_type,
            size: blob.size_bytes,
            data,
        };

        tracing::info!(
            name = %uploaded.name,
            summary = %uploaded.data.describe(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upload processed"
        );

        Ok(uploaded)
    }

    /// Ingest and pair the outcome with the notification shown to the user
    pub async fn ingest_with_notification<S>(
        &self,
        source: &S,
        request: &UploadRequest,
    ) -> (Result<UploadedFile>, Notification)
    where
        S: BlobSource + ?Sized,
    {
        let outcome = self.ingest(source, request).await;
        let notification = Notification::for_outcome(&request.file_name(), &outcome);

        if let Err(e) = &outcome {
            tracing::error!(name = %request.file_name(), error = %e, "Upload failed");
        }

        (outcome, notification)
    }
}

impl Default for FileIngestionUseCase {
    fn default() -> Self {
        Self::new(IngestionConfig::default())
    }
}
