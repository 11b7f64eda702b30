pub mod error;

// Upload ingestion module
pub mod ingest;
