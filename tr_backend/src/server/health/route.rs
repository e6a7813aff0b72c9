use crate::server::app_state::AppState;
use crate::server::health::controller::stats_handler;
use axum::routing::get;
use std::sync::Arc;
use tr_core::server::routes::BackendApiHealth;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(BackendApiHealth::Stats.path().as_str(), get(stats_handler))
}
