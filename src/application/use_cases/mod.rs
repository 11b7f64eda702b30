pub mod file_ingestion;
pub mod normalizer;
