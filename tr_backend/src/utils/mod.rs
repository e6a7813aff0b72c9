pub mod abort_guard;
pub mod sse_response_builder;
