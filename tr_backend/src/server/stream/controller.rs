use crate::error::ResultAPIStream;
use crate::server::app_state::AppState;
use crate::utils::sse_response_builder::SseResponseBuilder;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use tr_core::server::payload::prompt_request::PromptRequest;
use tracing::debug;

/// Streams the canned reply as SSE frames. The prompt is decoded and ignored.
pub async fn stream_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<PromptRequest>, JsonRejection>,
) -> ResultAPIStream {
    let req = req?.0;
    state.streamer.stats().record_request();
    debug!(
        prompt_len = req.prompt.len(),
        stream = req.stream,
        "Prompt received"
    );
    SseResponseBuilder::new(state.streamer.stream()).build()
}

pub async fn liveness_handler() -> &'static str {
    "Streaming endpoint is live"
}
