use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::TransportError;
use business::domain::fetch::http::{HttpMethod, HttpRequest, HttpResponse};
use business::domain::fetch::services::HttpTransport;

use crate::client::ApiClient;

pub struct HttpTransportReqwest {
    client: ApiClient,
}

impl HttpTransportReqwest {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpTransport for HttpTransportReqwest {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.client.endpoint_url(&request.endpoint)?;

        let mut builder = self
            .client
            .client
            .request(Self::method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            endpoint: endpoint.to_string(),
            headers: vec![],
            body: None,
        }
    }

    #[test]
    fn should_map_every_method() {
        assert_eq!(HttpTransportReqwest::method(HttpMethod::Get), Method::GET);
        assert_eq!(HttpTransportReqwest::method(HttpMethod::Post), Method::POST);
        assert_eq!(HttpTransportReqwest::method(HttpMethod::Put), Method::PUT);
        assert_eq!(HttpTransportReqwest::method(HttpMethod::Delete), Method::DELETE);
    }

    #[tokio::test]
    async fn should_fail_before_sending_when_base_url_invalid() {
        let transport = HttpTransportReqwest::new(ApiClient::new("::".to_string()));

        let result = transport.send(request("/api/lists")).await;

        assert!(matches!(result, Err(TransportError::InvalidEndpoint)));
    }

    #[tokio::test]
    async fn should_report_network_failure_when_unreachable() {
        // Grab a free port, then release it so nothing listens there.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let transport =
            HttpTransportReqwest::new(ApiClient::new(format!("http://127.0.0.1:{}", port)));

        let result = transport.send(request("/api/lists")).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }
}
