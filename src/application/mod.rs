pub mod use_cases;

pub use use_cases::file_ingestion::FileIngestionUseCase;
pub use use_cases::normalizer::{normalize, Normalizer};
