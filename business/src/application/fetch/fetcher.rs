use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::TransportError;
use crate::domain::fetch::http::{
    ACCEPT, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, FetchOutcome, HttpMethod, HttpRequest,
    HttpResponse, LOGIN_PATH,
};
use crate::domain::fetch::services::{HttpTransport, SessionContext};
use crate::domain::fetch::use_cases::fetch::Fetcher;
use crate::domain::logger::Logger;

pub struct FetcherImpl {
    pub transport: Arc<dyn HttpTransport>,
    pub session: Arc<dyn SessionContext>,
    pub logger: Arc<dyn Logger>,
}

impl FetcherImpl {
    fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<String>,
    ) -> HttpRequest {
        // A missing token still goes out, as the literal `null`.
        let token = self
            .session
            .current_token()
            .unwrap_or_else(|| "null".to_string());

        HttpRequest {
            method,
            endpoint: endpoint.to_string(),
            headers: vec![
                (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
                (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
                (AUTHORIZATION.to_string(), format!("Bearer {}", token)),
            ],
            body,
        }
    }

    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        let request = self.build_request(method, endpoint, body);
        self.logger.debug(&format!("{} {}", method, endpoint));

        let response = self.transport.send(request).await.inspect_err(|e| {
            self.logger
                .error(&format!("{} {} failed: {}", method, endpoint, e));
        })?;

        self.logger.debug(&format!(
            "{} {} answered {}",
            method, endpoint, response.status
        ));
        Ok(response)
    }

    /// Sends the user to the login page on a 403, unless already there.
    fn check_logged_in(&self, response: HttpResponse) -> FetchOutcome {
        if response.is_forbidden() {
            self.logger.warn("Not logged in");
            if self.session.current_location() != LOGIN_PATH {
                self.session.redirect_to_login();
                self.logger.info(&format!("Redirected to {}", LOGIN_PATH));
                return FetchOutcome::Redirected;
            }
        }
        FetchOutcome::Completed(response)
    }
}

#[async_trait]
impl Fetcher for FetcherImpl {
    async fn get(&self, endpoint: &str) -> Result<FetchOutcome, TransportError> {
        let response = self.send(HttpMethod::Get, endpoint, None).await?;
        Ok(self.check_logged_in(response))
    }

    async fn post(&self, endpoint: &str, body: String) -> Result<FetchOutcome, TransportError> {
        let response = self.send(HttpMethod::Post, endpoint, Some(body)).await?;
        Ok(self.check_logged_in(response))
    }

    async fn put(&self, endpoint: &str, body: String) -> Result<FetchOutcome, TransportError> {
        let response = self.send(HttpMethod::Put, endpoint, Some(body)).await?;
        Ok(self.check_logged_in(response))
    }

    async fn delete(&self, endpoint: &str) -> Result<FetchOutcome, TransportError> {
        let response = self.send(HttpMethod::Delete, endpoint, None).await?;
        Ok(FetchOutcome::Completed(response))
    }
}
