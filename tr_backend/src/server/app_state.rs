use crate::streaming::chunk_streamer::ChunkStreamer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub streamer: ChunkStreamer,
}
impl AppState {
    pub fn new(streamer: ChunkStreamer) -> Self {
        AppState { streamer }
    }
}
