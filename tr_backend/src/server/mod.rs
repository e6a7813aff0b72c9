pub mod app_state;
pub mod health;
pub mod http_server;
pub mod stream;
