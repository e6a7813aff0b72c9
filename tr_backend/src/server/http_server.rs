use crate::config::{ServerConfig, StreamerConfig};
use crate::error::{ErrorBackend, Result};
use crate::server::app_state::AppState;
use crate::server::{health, stream};
use crate::streaming::chunk_streamer::ChunkStreamer;
use crate::streaming::stream_stats::StreamStats;
use axum::http::StatusCode;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tr_core::server::routes::print_all_backend_api_paths;
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}

/// Builds the application router with CORS and request tracing.
pub fn router(app_state: Arc<AppState>) -> axum::Router {
    let routes = axum::Router::new()
        .merge(stream::route::routes())
        .merge(health::route::routes())
        .with_state(app_state);

    routes
        .fallback(fallback)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Starts the HTTP server.
///
/// # Arguments
/// * `config` - Listen address, read from the environment at startup.
/// * `streamer_config` - Source text, chunking and pacing for every response.
///
/// # Behavior
/// - Serves `POST /stream` and `POST /` as SSE, `GET /` and `GET /stream` as
///   health probes, `GET /stats` as counters.
/// - Stops accepting connections on Ctrl-C and waits for open streams.
#[tokio::main]
pub async fn http_server_backend(
    config: ServerConfig,
    streamer_config: StreamerConfig,
) -> Result<()> {
    let streamer = ChunkStreamer::new(streamer_config, Arc::new(StreamStats::default()));
    info!(
        "Streaming {} characters in chunks of {}, {}ms apart",
        streamer.config().source_text.chars().count(),
        streamer.config().chunk_size,
        streamer.config().inter_chunk_delay.as_millis()
    );
    let app_state = Arc::new(AppState::new(streamer));
    let router = router(app_state);

    print_all_backend_api_paths();

    let ServerConfig {
        host,
        port,
        protocol,
    } = &config;
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
