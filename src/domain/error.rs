use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestionError {
    ReadFailure(String),
    MalformedJson(String),
    /// Reader error from the RFC 4180 dialect. Input arrives as `&str` and
    /// rows may be ragged, so the `csv` reader has no UTF-8 or length
    /// error left to report; kept for the reader's io error path.
    MalformedCsv(String),
    EmptyFile(String),
    ValidationError(String),
    Internal(String),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionError::ReadFailure(msg) => write!(f, "Read failure: {}", msg),
            IngestionError::MalformedJson(msg) => write!(f, "Malformed JSON: {}", msg),
            IngestionError::MalformedCsv(msg) => write!(f, "Malformed CSV: {}", msg),
            IngestionError::EmptyFile(msg) => write!(f, "Empty file: {}", msg),
            IngestionError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            IngestionError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for IngestionError {}

impl From<std::io::Error> for IngestionError {
    fn from(err: std::io::Error) -> Self {
        IngestionError::ReadFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let internal = IngestionError::Internal("failed to serialize output: boom".to_string());
        assert_eq!(internal.to_string(), "Internal error: failed to serialize output: boom");
        assert_eq!(
            IngestionError::MalformedCsv("row 2".to_string()).to_string(),
            "Malformed CSV: row 2"
        );
    }

    #[test]
    fn test_io_error_is_read_failure() {
        let err: IngestionError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err, IngestionError::ReadFailure("denied".to_string()));
    }
}
