/// Failures of the underlying HTTP transport.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (connectivity, DNS, TLS...). The detail is
    /// the platform's message, unexamined.
    #[error("transport.network: {0}")]
    Network(String),
    #[error("transport.invalid_endpoint")]
    InvalidEndpoint,
}

impl TransportError {
    pub fn network(detail: impl Into<String>) -> Self {
        TransportError::Network(detail.into())
    }
    pub fn invalid_endpoint() -> Self {
        TransportError::InvalidEndpoint
    }
}
