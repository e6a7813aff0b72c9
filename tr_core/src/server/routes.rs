use tracing::info;

pub enum ApiPath {
    Static(&'static str),
    Dynamic(String),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
            ApiPath::Dynamic(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiStream {
    Stream,
    Root,
}

impl BackendApiStream {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiStream::Stream => ApiPath::Static("/stream"),
            BackendApiStream::Root => ApiPath::Static("/"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiHealth {
    Status,
    Stats,
}

impl BackendApiHealth {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiHealth::Status => ApiPath::Static("/"),
            BackendApiHealth::Stats => ApiPath::Static("/stats"),
        }
    }
}

/// Joins a base url such as `http://localhost:9090` with a route path.
pub fn backend_url(base_url: &str, path: ApiPath) -> ApiPath {
    ApiPath::Dynamic(format!("{}{}", base_url.trim_end_matches('/'), path.as_str()))
}

pub fn print_all_backend_api_paths() {
    for stream in [BackendApiStream::Stream, BackendApiStream::Root].iter() {
        info!("POST {}", stream.path().as_str());
    }

    for health in [BackendApiHealth::Status, BackendApiHealth::Stats].iter() {
        info!("GET  {}", health.path().as_str());
    }
}
