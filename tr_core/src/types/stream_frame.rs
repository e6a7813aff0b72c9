use crate::error::{ErrorCore, Result};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const SSE_DATA_PREFIX: &str = "data: ";
pub const SSE_FRAME_END: &str = "\n\n";
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub delta: Delta,
}

/// JSON body of a content frame, shaped like an OpenAI chat completion chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaEnvelope {
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

/// One unit of a response stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    Delta {
        content: String,
        padding: Option<String>,
    },
    Done,
}

impl StreamFrame {
    pub fn delta(content: impl Into<String>) -> Self {
        StreamFrame::Delta {
            content: content.into(),
            padding: None,
        }
    }

    /// Empty delta carrying `padding_len` spaces, used to push intermediary
    /// buffers into flushing before real content arrives.
    pub fn warm_up(padding_len: usize) -> Self {
        StreamFrame::Delta {
            content: String::new(),
            padding: Some(" ".repeat(padding_len)),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, StreamFrame::Done)
    }

    /// Delta content, `None` for the sentinel.
    pub fn content(&self) -> Option<&str> {
        match self {
            StreamFrame::Delta { content, .. } => Some(content.as_str()),
            StreamFrame::Done => None,
        }
    }

    fn to_envelope(&self) -> Option<DeltaEnvelope> {
        match self {
            StreamFrame::Delta { content, padding } => Some(DeltaEnvelope {
                choices: vec![Choice {
                    delta: Delta {
                        content: content.clone(),
                    },
                }],
                padding: padding.clone(),
            }),
            StreamFrame::Done => None,
        }
    }

    /// Renders the frame as a complete SSE event, trailing blank line included.
    pub fn to_sse(&self) -> String {
        let data = match self.to_envelope() {
            Some(envelope) => serde_json::to_string(&envelope).unwrap_or_else(|e| {
                error!("Failed to serialize stream frame to JSON: {}", e);
                String::default()
            }),
            None => DONE_SENTINEL.to_string(),
        };
        format!("{SSE_DATA_PREFIX}{data}{SSE_FRAME_END}")
    }

    /// Decodes the payload of a `data:` line, without the prefix.
    pub fn from_sse_data(data: &str) -> Result<Self> {
        let data = data.trim();
        if data == DONE_SENTINEL {
            return Ok(StreamFrame::Done);
        }
        let envelope: DeltaEnvelope = serde_json::from_str(data)?;
        let mut choices = envelope.choices.into_iter();
        match (choices.next(), choices.next()) {
            (Some(choice), None) => Ok(StreamFrame::Delta {
                content: choice.delta.content,
                padding: envelope.padding,
            }),
            _ => Err(ErrorCore::InvalidFrame(format!(
                "expected exactly one choice in {data}"
            ))),
        }
    }

    /// Decodes a full line such as `data: [DONE]`. Lines that are not SSE data
    /// lines (comments, blank keep-alives) return `None`.
    pub fn from_sse_line(line: &str) -> Option<Result<Self>> {
        line.strip_prefix(SSE_DATA_PREFIX)
            .or_else(|| line.strip_prefix("data:"))
            .map(Self::from_sse_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_wire_format() {
        let frame = StreamFrame::delta("ABC");
        assert_eq!(
            frame.to_sse(),
            "data: {\"choices\":[{\"delta\":{\"content\":\"ABC\"}}]}\n\n"
        );
    }

    #[test]
    fn test_done_wire_format() {
        assert_eq!(StreamFrame::Done.to_sse(), "data: [DONE]\n\n");
    }

    #[test]
    fn test_warm_up_carries_padding_field() {
        let sse = StreamFrame::warm_up(4).to_sse();
        assert_eq!(
            sse,
            "data: {\"choices\":[{\"delta\":{\"content\":\"\"}}],\"padding\":\"    \"}\n\n"
        );
    }

    #[test]
    fn test_special_characters_survive_encoding() {
        let content = "say \"hi\"\\\nnext";
        let sse = StreamFrame::delta(content).to_sse();
        let line = sse.trim_end_matches(SSE_FRAME_END);
        let decoded = StreamFrame::from_sse_line(line).unwrap().unwrap();
        assert_eq!(decoded.content(), Some(content));
        // escaped newline keeps the event on a single line
        assert_eq!(sse.matches('\n').count(), 2);
    }

    #[test]
    fn test_decode_done_sentinel() {
        let frame = StreamFrame::from_sse_line("data: [DONE]").unwrap().unwrap();
        assert!(frame.is_done());
        assert_eq!(frame.content(), None);
    }

    #[test]
    fn test_decode_ignores_non_data_lines() {
        assert!(StreamFrame::from_sse_line(": keep-alive").is_none());
        assert!(StreamFrame::from_sse_line("").is_none());
    }

    #[test]
    fn test_decode_rejects_empty_choices() {
        let res = StreamFrame::from_sse_data(r#"{"choices":[]}"#);
        assert!(matches!(res, Err(ErrorCore::InvalidFrame(_))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let res = StreamFrame::from_sse_data("not json");
        assert!(matches!(res, Err(ErrorCore::JsonError(_))));
    }
}
