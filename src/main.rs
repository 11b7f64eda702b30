use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    datadock_lib::run().await
}
