use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::fetch::http::FetchOutcome;

/// Authenticated JSON calls against the shopping API.
///
/// `get`, `post` and `put` turn a 403 into a login redirect; `delete`
/// returns whatever the server answered.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, endpoint: &str) -> Result<FetchOutcome, TransportError>;
    async fn post(&self, endpoint: &str, body: String) -> Result<FetchOutcome, TransportError>;
    async fn put(&self, endpoint: &str, body: String) -> Result<FetchOutcome, TransportError>;
    async fn delete(&self, endpoint: &str) -> Result<FetchOutcome, TransportError>;
}
