pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "9090";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_CLI_BACKEND_URL: &str = "http://localhost:9090";
