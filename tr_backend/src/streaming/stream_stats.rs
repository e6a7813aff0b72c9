use std::sync::atomic::{AtomicU64, Ordering};
use tr_core::server::payload::stats_response::StatsResponse;

/// Process-lifetime counters. Streams never read them, so no stream state is
/// shared between requests.
#[derive(Debug, Default)]
pub struct StreamStats {
    requests: AtomicU64,
    frames_produced: AtomicU64,
    streams_completed: AtomicU64,
    streams_cancelled: AtomicU64,
}

impl StreamStats {
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_frame(&self) {
        self.frames_produced.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completed(&self) {
        self.streams_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cancelled(&self) {
        self.streams_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsResponse {
        StatsResponse {
            requests: self.requests.load(Ordering::Relaxed),
            frames_produced: self.frames_produced.load(Ordering::Relaxed),
            streams_completed: self.streams_completed.load(Ordering::Relaxed),
            streams_cancelled: self.streams_cancelled.load(Ordering::Relaxed),
        }
    }
}
