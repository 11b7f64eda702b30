pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

mod app;

pub use app::run;
pub use application::{normalize, FileIngestionUseCase, Normalizer};
pub use domain::error::{IngestionError, Result};
pub use domain::ingest::{
    BlobContent, CsvDialect, DetectedFormat, EmptyFilePolicy, FileCategory, IngestionConfig,
    NormalizedRecordSet, Notification, RowMapping, RowSet, UploadedBlob, UploadedFile,
};
pub use infrastructure::upload::{BlobSource, FileSystemSource, InMemorySource, UploadRequest};
