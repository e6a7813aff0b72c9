use crate::error::{ErrorBackend, ResultAPIStream};
use axum::body::Body;
use http::{StatusCode, header};
use axum::response::Response;
use futures::{Stream, StreamExt};
use std::convert::Infallible;
use tr_core::types::stream_frame::StreamFrame;

pub const X_ACCEL_BUFFERING: &str = "X-Accel-Buffering";

/// A builder for constructing a Server-Sent Events (SSE) HTTP response
/// from a stream of `StreamFrame`.
///
/// Each frame is rendered with [`StreamFrame::to_sse`] and written to the body
/// as soon as it is produced. Caching and proxy buffering are disabled through
/// response headers.
///
/// Typical usage:
/// ```ignore
/// let response = SseResponseBuilder::new(streamer.stream()).build();
/// ```
pub struct SseResponseBuilder<S> {
    frames: S,
}

impl<S> SseResponseBuilder<S>
where
    S: Stream<Item = StreamFrame> + Send + 'static,
{
    pub fn new(frames: S) -> Self {
        Self { frames }
    }

    /// Builds the final SSE-compatible HTTP response.
    ///
    /// # Errors
    /// Returns `FailedBuildSSEResponse` if the HTTP response construction fails.
    pub fn build(self) -> ResultAPIStream {
        let stream = self
            .frames
            .map(|frame| Ok::<_, Infallible>(frame.to_sse()));

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/event-stream")
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::CONNECTION, "keep-alive")
            .header(X_ACCEL_BUFFERING, "no")
            .body(Body::from_stream(stream))
            .map_err(|e| ErrorBackend::FailedBuildSSEResponse(e.to_string()))
    }
}
