use crate::config::{ServerConfig, StreamerConfig};
use crate::error::Result;
use tr_core::logger::init_tracing;

mod config;
mod error;
mod server;
mod streaming;
mod utils;

fn run() -> Result<()> {
    init_tracing();
    let config = ServerConfig::from_env()?;
    server::http_server::http_server_backend(config, StreamerConfig::default())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
