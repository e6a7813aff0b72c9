use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Setting
/// `TRICKLE_DEBUG=true` forces `debug` regardless of `RUST_LOG`.
pub fn init_tracing() {
    let trickle_debug = env::var("TRICKLE_DEBUG").unwrap_or_else(|_| "false".to_string());

    let filter = if trickle_debug == "true" {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // try_init so a second call (tests, embedded use) is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
