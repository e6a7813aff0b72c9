use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsResponse {
    pub requests: u64,
    pub frames_produced: u64,
    pub streams_completed: u64,
    pub streams_cancelled: u64,
}
