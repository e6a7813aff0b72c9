use serde::{Deserialize, Serialize};

/// Body of `POST /stream`.
///
/// `prompt` is required but never read by the generator. `stream` is accepted
/// for client compatibility; every response streams.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptRequest {
    pub prompt: String,
    #[serde(default = "default_stream")]
    pub stream: bool,
}

fn default_stream() -> bool {
    true
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        PromptRequest {
            prompt: prompt.into(),
            stream: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_defaults_to_true() {
        let req: PromptRequest = serde_json::from_str(r#"{"prompt":"hello"}"#).unwrap();
        assert_eq!(req.prompt, "hello");
        assert!(req.stream);
    }

    #[test]
    fn test_explicit_stream_false_is_kept() {
        let req: PromptRequest =
            serde_json::from_str(r#"{"prompt":"hello","stream":false}"#).unwrap();
        assert!(!req.stream);
    }

    #[test]
    fn test_missing_prompt_is_rejected() {
        let req = serde_json::from_str::<PromptRequest>(r#"{"stream":true}"#);
        assert!(req.is_err());
    }
}
