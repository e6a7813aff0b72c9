use crate::server::app_state::AppState;
use crate::server::health::controller::health_handler;
use crate::server::stream::controller::{liveness_handler, stream_handler};
use axum::routing::post;
use std::sync::Arc;
use tr_core::server::routes::BackendApiStream;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiStream::Stream.path().as_str(),
            post(stream_handler).get(liveness_handler),
        )
        .route(
            BackendApiStream::Root.path().as_str(),
            post(stream_handler).get(health_handler),
        )
}
