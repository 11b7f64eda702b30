use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::interfaces::cli::{execute, Cli};

pub async fn run() -> ExitCode {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    execute(Cli::parse()).await
}
