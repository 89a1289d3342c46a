//! Tubescribe CLI binary.
//!
//! - `tubescribe run <TOPIC>` generates a title and script for one topic
//! - `tubescribe interactive` reads topics from stdin in one session

use clap::Parser;
use tracing::debug;
use tubescribe::{ApiAccess, TubescribeConfig, build_session, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_interactive, run_once};

    // .env must be loaded before clap reads OPENAI_API_KEY
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs)?;

    let config = TubescribeConfig::load_with(cli.config.as_deref())?;
    let session = build_session(&config)?;
    let access = ApiAccess::from_token(cli.api_key.as_deref());
    debug!(enabled = access.is_enabled(), model = %config.model.model, "Starting");

    match cli.command {
        Commands::Run { topic, format } => {
            run_once(session, &topic, &access, format).await?;
        }

        Commands::Interactive { format } => {
            run_interactive(session, &access, format).await?;
        }
    }

    Ok(())
}
