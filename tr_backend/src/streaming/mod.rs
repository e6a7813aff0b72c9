pub mod chunk_streamer;
pub mod chunks;
pub mod source_text;
pub mod stream_stats;
