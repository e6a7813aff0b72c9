use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::json;
use std::sync::Arc;
use tr_core::server::payload::health_response::HealthResponse;

pub async fn health_handler() -> ResultAPI {
    Ok(Json(json!(HealthResponse::ok())))
}

pub async fn stats_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    Ok(Json(json!(state.streamer.stats().snapshot())))
}
