// ============================================================
// INGESTION DOMAIN LAYER
// ============================================================
// Core types and value objects for uploaded file ingestion
// No I/O, no async

mod blob;
mod format;
mod ingestion_config;
mod notification;
mod record_set;

pub use blob::{BlobContent, UploadedBlob};
pub use format::{
    effective_type, infer_declared_type, is_accepted, DetectedFormat, FileCategory,
    ACCEPTED_EXTENSIONS,
};
pub use ingestion_config::{CsvDialect, EmptyFilePolicy, IngestionConfig};
pub use notification::{Notification, NotificationVariant};
pub use record_set::{NormalizedRecordSet, RowMapping, RowSet, UploadedFile};
