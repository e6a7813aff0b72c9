pub mod stream_response_bytes;
pub mod typewriter;
