use std::process::ExitCode;

use clap::Parser;
use eta_core::errors::EtaErrorCode;
use eta_server::{app, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Tracing may not be up yet if config loading failed.
            tracing::error!(code = e.error_code(), error = %e, "eta exiting");
            eprintln!("eta: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
