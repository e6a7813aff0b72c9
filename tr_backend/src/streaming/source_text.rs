use std::sync::Arc;

const BASE_TEXT: &str = concat!(
    "Streaming large language model APIs enable real-time content generation ",
    "by progressively delivering tokens as they are produced. Unlike traditional ",
    "batch inference systems, streaming architectures significantly reduce perceived ",
    "latency and improve user experience. By transmitting partial responses, ",
    "applications such as chat assistants, AI writing tools, and collaborative ",
    "platforms can provide immediate feedback. Proper streaming implementation ",
    "requires chunked transfer encoding, Server-Sent Events formatting, explicit ",
    "buffer flushing, and robust error handling mechanisms. Developers must manage ",
    "timeouts, rate limits, network interruptions, and proxy buffering behaviors. ",
    "Performance metrics such as first-token latency and token throughput are ",
    "critical for evaluating scalability. Efficient streaming systems typically ",
    "use asynchronous frameworks and non-blocking IO to maintain responsiveness ",
    "under heavy load. In production environments, reverse proxies and containerized ",
    "infrastructure must be configured to disable buffering. Monitoring and logging ",
    "ensure observability and reliability across distributed deployments. ",
);

const BASE_TEXT_REPEAT: usize = 8;

/// The canned reply every request receives, built once per config.
pub fn canned_source_text() -> Arc<str> {
    Arc::from(BASE_TEXT.repeat(BASE_TEXT_REPEAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_text_is_repeated_block() {
        let text = canned_source_text();
        assert_eq!(text.len(), BASE_TEXT.len() * BASE_TEXT_REPEAT);
        assert!(text.starts_with("Streaming large language model APIs"));
        assert!(text.ends_with("distributed deployments. "));
    }
}
