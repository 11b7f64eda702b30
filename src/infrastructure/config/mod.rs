use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use validator::Validate;

use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::IngestionConfig;

pub const ENV_PREFIX: &str = "DATADOCK_";
pub const DEFAULT_CONFIG_FILE: &str = "datadock.toml";

/// Layered ingestion settings: defaults, then a TOML file, then
/// `DATADOCK_*` environment variables
pub struct ConfigService {
    file: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self { file: None }
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    fn config_file(&self) -> &Path {
        self.file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(IngestionConfig::default()))
            .merge(Toml::file(self.config_file()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<IngestionConfig> {
        if let Some(path) = &self.file {
            if !path.exists() {
                return Err(IngestionError::ValidationError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        let config: IngestionConfig = self.figment().extract().map_err(|e| {
            IngestionError::ValidationError(format!("Invalid configuration: {}", e))
        })?;

        config.validate().map_err(|e| {
            IngestionError::ValidationError(format!("Invalid ingestion config: {}", e))
        })?;

        tracing::debug!(?config, "Loaded ingestion config");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
