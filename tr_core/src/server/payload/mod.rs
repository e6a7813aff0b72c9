pub mod health_response;
pub mod prompt_request;
pub mod stats_response;
