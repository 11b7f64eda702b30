// ============================================================
// UPLOAD NOTIFICATIONS
// ============================================================
// User-facing message describing how an upload ended

use serde::{Deserialize, Serialize};

use crate::domain::error::IngestionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(file_name: &str) -> Self {
        Self {
            title: "File uploaded successfully".to_string(),
            description: format!("{} has been processed", file_name),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(file_name: &str, error: &IngestionError) -> Self {
        let (title, description) = match error {
            IngestionError::MalformedJson(_) => (
                "Error parsing JSON file",
                "The file could not be parsed correctly".to_string(),
            ),
            IngestionError::ReadFailure(_) => (
                "Error reading file",
                "Could not read the selected file".to_string(),
            ),
            IngestionError::EmptyFile(_) => {
                ("Empty file", format!("{} contains no data", file_name))
            }
            _ => (
                "Error processing file",
                "An unexpected error occurred".to_string(),
            ),
        };

        Self {
            title: title.to_string(),
            description,
            variant: NotificationVariant::Destructive,
        }
    }

    /// Notification for the outcome of one ingestion
    pub fn for_outcome<T>(file_name: &str, outcome: &Result<T, IngestionError>) -> Self {
        match outcome {
            Ok(_) => Self::success(file_name),
            Err(error) => Self::failure(file_name, error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
