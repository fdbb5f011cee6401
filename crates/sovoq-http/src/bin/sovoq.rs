//! Sovos e-invoicing queue client binary.

use std::process::ExitCode;

use clap::Parser;
use sovoq::SovoqError;
use sovoq_http::http::cli::{Cli, StdinConfirm, handle_cli_command};
use sovoq_http::{Config, QueueClient};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the variables may already be set.
    let _ = dotenvy::dotenv();
    sovoq::telemetry::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            sovoq::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SovoqError> {
    let config = Config::from_env()?;
    let client = QueueClient::new(config);
    handle_cli_command(&client, cli.command, &mut StdinConfirm).await
}
