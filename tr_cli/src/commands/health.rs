use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let health = cli_client.health().await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}

pub async fn handle_stats(cli_client: &CliClient) -> Result<()> {
    let stats = cli_client.stats().await?;
    println!("requests:          {}", stats.requests);
    println!("frames produced:   {}", stats.frames_produced);
    println!("streams completed: {}", stats.streams_completed);
    println!("streams cancelled: {}", stats.streams_cancelled);
    Ok(())
}
