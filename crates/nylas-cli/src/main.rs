//! nylas CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use nylas::Client;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;

use cli::{Cli, Command};
use error::CliResult;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let client = Client::builder(cli.api_key.clone())
        .region(cli.region)
        .timeout(Duration::from_secs(cli.timeout))
        .build();
    let grant_id = cli.grant_id.as_deref();

    match cli.command {
        Command::Messages { unread } => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::messages(&client, grant_id, unread, cli.limit).await
        }
        Command::Message { ref id } => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::message(&client, grant_id, id).await
        }
        Command::Threads => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::threads(&client, grant_id, cli.limit).await
        }
        Command::Events { ref calendar_id } => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::events(&client, grant_id, calendar_id, cli.limit).await
        }
        Command::Calendars => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::calendars(&client, grant_id).await
        }
        Command::Contacts => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::contacts(&client, grant_id, cli.limit).await
        }
        Command::Folders => {
            let grant_id = commands::require_grant(grant_id)?;
            commands::folders(&client, grant_id).await
        }
        Command::Grants => commands::grants(&client, cli.limit).await,
    }
}
