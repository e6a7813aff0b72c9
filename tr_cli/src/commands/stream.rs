use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use crate::utils::stream_response_bytes::stream_response_bytes;
use crate::utils::typewriter::typewriter;
use tr_core::server::payload::prompt_request::PromptRequest;
use tr_core::types::stream_frame::StreamFrame;
use tracing::debug;

pub async fn handle(cli_client: &CliClient, prompt: String, typewriter_ms: u64) -> Result<()> {
    let response = cli_client.send_prompt(&PromptRequest::new(prompt)).await?;
    let mut rx = stream_response_bytes(response.bytes_stream()).await;

    let mut deltas = 0usize;
    while let Some(data) = rx.recv().await {
        match StreamFrame::from_sse_data(&data)? {
            StreamFrame::Delta { content, .. } => {
                typewriter(&content, typewriter_ms).await?;
                deltas += 1;
            }
            StreamFrame::Done => {
                println!();
                debug!("Received {deltas} deltas");
                return Ok(());
            }
        }
    }
    println!();
    Err(ErrorCli::StreamEndedEarly)
}
