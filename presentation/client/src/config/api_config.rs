use std::env;

/// Where the shopping API lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Environment variables:
    /// - API_BASE_URL: Origin the endpoints are resolved against (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self { base_url }
    }
}
