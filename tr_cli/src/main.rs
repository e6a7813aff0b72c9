use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
use tr_core::logger::init_tracing;
mod cli;
mod client;
mod commands;
mod error;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.url);

    match cli.command {
        Commands::Stream {
            prompt,
            typewriter_ms,
        } => commands::stream::handle(&cli_client, prompt, typewriter_ms).await?,
        Commands::Health => commands::health::handle(&cli_client).await?,
        Commands::Stats => commands::health::handle_stats(&cli_client).await?,
    }

    Ok(())
}
