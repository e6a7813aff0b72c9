use crate::config::StreamerConfig;
use crate::streaming::chunks::chunks;
use crate::streaming::stream_stats::StreamStats;
use crate::utils::abort_guard::AbortGuard;
use futures::Stream;
use futures::StreamExt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc::{self, Sender};
use tokio_stream::wrappers::ReceiverStream;
use tr_core::types::stream_frame::StreamFrame;
use tracing::{debug, info};

/// Turns the configured source text into a paced sequence of SSE frames.
///
/// Each call to [`ChunkStreamer::stream`] starts an independent producer task;
/// streams share the read-only config and the stats counters, nothing else.
#[derive(Debug, Clone)]
pub struct ChunkStreamer {
    config: Arc<StreamerConfig>,
    stats: Arc<StreamStats>,
}

impl ChunkStreamer {
    pub fn new(config: StreamerConfig, stats: Arc<StreamStats>) -> Self {
        ChunkStreamer {
            config: Arc::new(config),
            stats,
        }
    }

    pub fn config(&self) -> &StreamerConfig {
        &self.config
    }

    pub fn stats(&self) -> &Arc<StreamStats> {
        &self.stats
    }

    /// Starts a fresh stream from the beginning of the source text.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// stream aborts its producer.
    pub fn stream(&self) -> FrameStream {
        // capacity 1: the producer is never more than one frame ahead
        let (tx, rx) = mpsc::channel::<StreamFrame>(1);
        let handle = tokio::spawn(produce(self.config.clone(), self.stats.clone(), tx));
        FrameStream {
            rx: ReceiverStream::new(rx),
            _guard: AbortGuard::new(handle),
        }
    }
}

/// Frames of one response, in order, ending with [`StreamFrame::Done`].
pub struct FrameStream {
    rx: ReceiverStream<StreamFrame>,
    _guard: AbortGuard,
}

impl Stream for FrameStream {
    type Item = StreamFrame;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_next_unpin(cx)
    }
}

/// Counts the stream as cancelled unless it reached the sentinel.
struct StreamLifecycle {
    stats: Arc<StreamStats>,
    finished: bool,
}

impl StreamLifecycle {
    fn finish(mut self) {
        self.finished = true;
        self.stats.record_completed();
        debug!("Stream completed");
    }
}

impl Drop for StreamLifecycle {
    fn drop(&mut self) {
        if !self.finished {
            self.stats.record_cancelled();
            info!("Client disconnected, stream production stopped");
        }
    }
}

async fn produce(config: Arc<StreamerConfig>, stats: Arc<StreamStats>, tx: Sender<StreamFrame>) {
    let lifecycle = StreamLifecycle {
        stats: stats.clone(),
        finished: false,
    };
    debug!(
        chunk_size = config.chunk_size.get(),
        delay_ms = config.inter_chunk_delay.as_millis() as u64,
        warm_up = config.warm_up.is_some(),
        "Stream started"
    );

    if let Some(warm_up) = config.warm_up {
        if !emit(&tx, &stats, || StreamFrame::warm_up(warm_up.padding_len)).await {
            return;
        }
        tokio::task::yield_now().await;
    }

    for chunk in chunks(&config.source_text, config.chunk_size) {
        if !emit(&tx, &stats, || StreamFrame::delta(chunk)).await {
            return;
        }
        if !pause(&tx, config.inter_chunk_delay).await {
            return;
        }
    }

    if !emit(&tx, &stats, || StreamFrame::Done).await {
        return;
    }
    lifecycle.finish();
}

/// Builds and sends one frame. Returns `false` once the consumer is gone, in
/// which case the frame is not built at all.
async fn emit(
    tx: &Sender<StreamFrame>,
    stats: &StreamStats,
    frame: impl FnOnce() -> StreamFrame,
) -> bool {
    if tx.is_closed() {
        return false;
    }
    let frame = frame();
    stats.record_frame();
    tx.send(frame).await.is_ok()
}

/// Sleeps for `delay`, waking early if the consumer disconnects.
async fn pause(tx: &Sender<StreamFrame>, delay: Duration) -> bool {
    if delay.is_zero() {
        return !tx.is_closed();
    }
    tokio::select! {
        _ = tokio::time::sleep(delay) => !tx.is_closed(),
        _ = tx.closed() => false,
    }
}
