pub mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::application::FileIngestionUseCase;
use crate::domain::error::{IngestionError, Result};
use crate::domain::ingest::{CsvDialect, IngestionConfig};
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::upload::{FileSystemSource, UploadRequest};
use output::{render_summary, JsonOut, UploadedFileOut};

#[derive(Parser, Debug)]
#[command(name = "datadock", version, about = "Ingest CSV, JSON and spreadsheet uploads")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ./datadock.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a file and print it as JSON
    Ingest {
        #[command(flatten)]
        upload: UploadArgs,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print a short human-readable summary of a file
    Inspect {
        #[command(flatten)]
        upload: UploadArgs,
    },
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    pub path: PathBuf,
    #[arg(long = "type", help = "Declared MIME type (inferred from the extension if omitted)")]
    pub declared_type: Option<String>,
    #[arg(long, help = "CSV grammar: naive or rfc4180")]
    pub dialect: Option<CsvDialect>,
}

impl UploadArgs {
    fn request(&self) -> UploadRequest {
        let request = UploadRequest::new(&self.path);
        match &self.declared_type {
            Some(declared) => request.with_declared_type(declared.clone()),
            None => request,
        }
    }

    fn apply(&self, mut config: IngestionConfig) -> IngestionConfig {
        if let Some(dialect) = self.dialect {
            config.csv_dialect = dialect;
        }
        config
    }
}

impl Commands {
    fn upload(&self) -> &UploadArgs {
        match self {
            Commands::Ingest { upload, .. } | Commands::Inspect { upload } => upload,
        }
    }
}

fn load_config(cli: &Cli) -> Result<IngestionConfig> {
    let service = match &cli.config {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    service.load()
}

pub async fn execute(cli: Cli) -> ExitCode {
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let upload = cli.command.upload();
    let use_case = FileIngestionUseCase::new(upload.apply(config));
    let request = upload.request();
    let (outcome, notification) = use_case
        .ingest_with_notification(&FileSystemSource::new(), &request)
        .await;

    match &cli.command {
        Commands::Ingest { pretty, .. } => {
            let envelope = JsonOut {
                ok: outcome.is_ok(),
                data: outcome.as_ref().ok().map(UploadedFileOut::from),
                error: outcome.as_ref().err().map(|e| e.to_string()),
                notification: &notification,
            };
            let rendered = if *pretty {
                serde_json::to_string_pretty(&envelope)
            } else {
                serde_json::to_string(&envelope)
            };
            match rendered {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    let error = IngestionError::Internal(format!("failed to serialize output: {}", e));
                    tracing::error!(error = %error, "Failed to render ingest output");
                    eprintln!("{}", error);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::Inspect { .. } => {
            if let Ok(file) = &outcome {
                print!("{}", render_summary(file, use_case.config().preview_rows));
            }
            if notification.is_error() {
                eprintln!("{}", notification);
            } else {
                println!("{}", notification);
            }
        }
    }

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
