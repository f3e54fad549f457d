use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};
use crate::domain::errors::TransportError;

/// Service port for sending one HTTP request.
///
/// Implementations make exactly one network attempt: no retries, no timeout.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Access to the client session: stored credentials and current location.
pub trait SessionContext: Send + Sync {
    /// Token currently in storage, `None` when nothing is stored. Read on
    /// every call, never cached.
    fn current_token(&self) -> Option<String>;

    /// Path of the page the user is on.
    fn current_location(&self) -> String;

    /// Sends the user to the login page.
    fn redirect_to_login(&self);
}
