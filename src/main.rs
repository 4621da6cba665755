//! Main entry point for the Yaraku Translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yaraku_translate::cli::commands::{self, Commands, ConnectionArgs};

/// Yaraku Translate - translate texts from the command line
#[derive(Parser, Debug)]
#[command(name = "yaraku-translate", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let default_filter = format!("{}={}", env!("CARGO_CRATE_NAME"), log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Translate { from, to, texts } => {
            commands::handle_translate(&cli.connection, from, to, texts).await?;
        }
        Commands::Codes => commands::handle_codes(),
    }

    Ok(())
}
