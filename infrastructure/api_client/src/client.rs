use reqwest::{Client, Url};

use business::domain::errors::TransportError;

/// Shared HTTP client bound to the API origin.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    /// No timeout is configured: a call waits as long as the network does.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Resolves an endpoint against the base URL the way a browser resolves a
    /// relative fetch: absolute paths replace the base path, absolute URLs
    /// are used as-is.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, TransportError> {
        let base = Url::parse(&self.base_url).map_err(|_| TransportError::invalid_endpoint())?;
        base.join(endpoint)
            .map_err(|_| TransportError::invalid_endpoint())
    }
}
