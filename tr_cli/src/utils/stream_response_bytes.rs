use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tr_core::types::stream_frame::SSE_DATA_PREFIX;
use tracing::warn;

const EVENT_END: &[u8] = b"\n\n";

/// Splits a raw SSE byte stream into the payloads of its `data:` lines.
///
/// Events may arrive split across network chunks, including in the middle of
/// a multi-byte character; bytes are buffered until a blank line ends the event.
pub async fn stream_response_bytes(
    stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> tokio::sync::mpsc::Receiver<String> {
    let mut stream = Box::pin(stream);
    let (tx, rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let mut buffer: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(data) => data,
                Err(e) => {
                    warn!("Error receiving chunk: {}", e);
                    break;
                }
            };
            buffer.extend(chunk.iter().filter(|b| **b != b'\r'));

            while let Some(pos) = find_event_end(&buffer) {
                let event: Vec<u8> = buffer.drain(..pos + EVENT_END.len()).collect();
                let event = match String::from_utf8(event) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Error converting event to string: {}", e);
                        continue;
                    }
                };
                for data in event_data(&event) {
                    if tx.send(data).await.is_err() {
                        return;
                    }
                }
            }
        }
    });
    rx
}

fn find_event_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(EVENT_END.len())
        .position(|window| window == EVENT_END)
}

/// Joins the `data:` lines of one event, skipping comments and other fields.
fn event_data(event: &str) -> Option<String> {
    let lines: Vec<&str> = event
        .lines()
        .filter_map(|line| {
            line.strip_prefix(SSE_DATA_PREFIX)
                .or_else(|| line.strip_prefix("data:"))
        })
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    async fn collect(chunks: Vec<&'static [u8]>) -> Vec<String> {
        let data_chunks: Vec<Result<Bytes, reqwest::Error>> = chunks
            .into_iter()
            .map(|c| Ok(Bytes::from_static(c)))
            .collect();
        let mut rx = stream_response_bytes(stream::iter(data_chunks)).await;
        let mut output = vec![];
        while let Some(data) = rx.recv().await {
            output.push(data);
        }
        output
    }

    #[tokio::test]
    async fn test_stream_response_bytes() {
        let output = collect(vec![
            &b"data: {\"key\": \"value\"}\n\n"[..],
            // event split across two network chunks
            &b"data: {\"another_key\":"[..],
            &b"\"another_value\"}\n\ndata: [DONE]\n\n"[..],
        ])
        .await;

        assert_eq!(
            output,
            vec![
                "{\"key\": \"value\"}",
                "{\"another_key\":\"another_value\"}",
                "[DONE]",
            ]
        );
    }

    #[tokio::test]
    async fn test_multibyte_char_split_between_chunks() {
        // "é" is 0xC3 0xA9
        let output = collect(vec![&b"data: caf\xC3"[..], &b"\xA9\n\n"[..]]).await;
        assert_eq!(output, vec!["café"]);
    }

    #[tokio::test]
    async fn test_comments_and_crlf_are_handled() {
        let output = collect(vec![&b": ping\r\n\r\ndata: one\r\n\r\n"[..]]).await;
        assert_eq!(output, vec!["one"]);
    }

    #[tokio::test]
    async fn test_unterminated_event_is_dropped() {
        let output = collect(vec![&b"data: one\n\ndata: partial"[..]]).await;
        assert_eq!(output, vec!["one"]);
    }
}
