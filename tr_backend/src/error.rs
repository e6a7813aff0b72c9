use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

pub type ResultAPIStream = std::result::Result<Response, ErrorBackend>;
pub type ResultAPI = std::result::Result<Json<Value>, ErrorBackend>;
pub type Result<T> = std::result::Result<T, ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] tr_core::error::ErrorCore),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(#[from] JsonRejection),

    #[error("Failed to build SSE response: {0}")]
    FailedBuildSSEResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ErrorBackend {
    fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::Core(tr_core::error::ErrorCore::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            ErrorBackend::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::IO(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::FailedBuildSSEResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": match status {
                StatusCode::BAD_REQUEST => self.to_string(),
                _ => "An unexpected error occurred".to_string(),
            }
        }));

        error!("ErrorBackend occurred: {}", self);
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tr_core::error::ErrorCore;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = ErrorBackend::from(ErrorCore::InvalidInput("chunk size".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = ErrorBackend::FailedBuildSSEResponse("boom".into());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
