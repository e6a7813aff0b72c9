use crate::error::{ErrorBackend, Result};
use crate::streaming::source_text::canned_source_text;
use std::env;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tr_core::error::ErrorCore;
use tr_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};

pub const DEFAULT_CHUNK_SIZE: usize = 120;
pub const DEFAULT_INTER_CHUNK_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_WARM_UP_PADDING: usize = 2048;

/// Where the HTTP server listens. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `SERVER_BACKEND_PORT` wins over the platform-style `PORT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
        let protocol = lookup("SERVER_BACKEND_PROTOCOL")
            .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));
        let port = lookup("SERVER_BACKEND_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ErrorBackend::InvalidConfig(format!("port {port:?}: {e}")))?;
        Ok(ServerConfig {
            host,
            port,
            protocol,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leading frame sent before content to force proxies to flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmUp {
    pub padding_len: usize,
}

/// Tunables for [`crate::streaming::chunk_streamer::ChunkStreamer`].
#[derive(Debug, Clone)]
pub struct StreamerConfig {
    pub source_text: Arc<str>,
    pub chunk_size: NonZeroUsize,
    pub inter_chunk_delay: Duration,
    pub warm_up: Option<WarmUp>,
}

impl StreamerConfig {
    /// Fails with `InvalidInput` when `chunk_size` is zero.
    pub fn new(
        source_text: impl Into<Arc<str>>,
        chunk_size: usize,
        inter_chunk_delay: Duration,
    ) -> std::result::Result<Self, ErrorCore> {
        let chunk_size = NonZeroUsize::new(chunk_size)
            .ok_or_else(|| ErrorCore::InvalidInput("chunk size must be greater than 0".into()))?;
        Ok(StreamerConfig {
            source_text: source_text.into(),
            chunk_size,
            inter_chunk_delay,
            warm_up: None,
        })
    }

    pub fn with_warm_up(mut self, warm_up: Option<WarmUp>) -> Self {
        self.warm_up = warm_up;
        self
    }
}

impl Default for StreamerConfig {
    fn default() -> Self {
        StreamerConfig {
            source_text: canned_source_text(),
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
            inter_chunk_delay: DEFAULT_INTER_CHUNK_DELAY,
            warm_up: Some(WarmUp {
                padding_len: DEFAULT_WARM_UP_PADDING,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.protocol, "http");
    }

    #[test]
    fn test_port_fallback_and_precedence() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8000")])).unwrap();
        assert_eq!(config.port, 8000);

        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8000"),
            ("SERVER_BACKEND_PORT", "7000"),
        ]))
        .unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_invalid_port() {
        let res = ServerConfig::from_lookup(lookup(&[("PORT", "http")]));
        assert!(matches!(res, Err(ErrorBackend::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_chunk_size_is_invalid_input() {
        let res = StreamerConfig::new("abc", 0, Duration::ZERO);
        assert!(matches!(res, Err(ErrorCore::InvalidInput(_))));
    }

    #[test]
    fn test_default_streamer_matches_canned_service() {
        let config = StreamerConfig::default();
        assert_eq!(config.chunk_size.get(), 120);
        assert_eq!(config.inter_chunk_delay, Duration::from_millis(50));
        assert_eq!(config.warm_up, Some(WarmUp { padding_len: 2048 }));
        assert!(config.source_text.chars().count() > 1625);
    }
}
