use std::sync::Arc;

use api_client::client::ApiClient;
use api_client::transport::HttpTransportReqwest;
use business::application::fetch::fetcher::FetcherImpl;
use logger::TracingLogger;
use session::store::KeyValueSession;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub fetcher: Arc<FetcherImpl>,
    pub session: Arc<KeyValueSession>,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        let mut session = KeyValueSession::new(config.session.location);
        if let Some(token) = config.session.token {
            session = session.with_token(token);
        }
        let session = Arc::new(session);

        let transport = Arc::new(HttpTransportReqwest::new(ApiClient::new(
            config.api.base_url,
        )));

        let fetcher = Arc::new(FetcherImpl {
            transport,
            session: session.clone(),
            logger,
        });

        Self { fetcher, session }
    }
}
