use std::env;

/// Initial state of the client session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub token: Option<String>,
    pub location: String,
}

impl SessionConfig {
    /// Environment variables:
    /// - API_TOKEN: Bearer token to start with (optional)
    /// - CLIENT_LOCATION: Page the client acts from (default: "/")
    pub fn from_env() -> Self {
        Self {
            token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
            location: env::var("CLIENT_LOCATION").unwrap_or_else(|_| "/".to_string()),
        }
    }
}
