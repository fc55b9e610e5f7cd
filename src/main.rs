//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, Sleeper},
    commands::handle_get,
    logging::init_logging,
    SleeperClient,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Sleeper::parse();
    init_logging(&app.global.log_config())?;

    let mut client = SleeperClient::new(app.global.client_config()).await?;

    match app.command {
        Commands::Get { cmd } => handle_get(&mut client, cmd).await?,
    }

    let ledger = client.ledger();
    tracing::debug!(
        total_attempts = ledger.total_attempts(),
        last_call_succeeded = ledger.last_call_succeeded(),
        has_ever_failed = ledger.has_ever_failed(),
        "call ledger"
    );

    Ok(())
}
