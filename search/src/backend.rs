//! HTTP client for the account, review and vote endpoints.

use async_trait::async_trait;
use boiler_core::auth::Backend;
use boiler_core::thumbs::{VoteBatch, VoteSink};
use boiler_core::traffic::VISITORS_PATH;
use boiler_core::types::AppConfig;
use boiler_core::types::domain::ChartData;
use boiler_core::TransportError;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

pub const UPDATE_THUMBS_PATH: &str = "/update-thumbs";

/// JSON-over-HTTP backend rooted at one base URL.
///
/// Keeps a cookie store so the session set by `/authenticate` is sent on
/// later calls.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(client_error)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Backend for marketplace accounts.
    pub fn swap(config: &AppConfig) -> Result<Self, TransportError> {
        Self::new(&config.endpoints.swap_backend)
    }

    /// Backend for housing reviews and votes.
    pub fn housing(config: &AppConfig) -> Result<Self, TransportError> {
        Self::new(&config.endpoints.housing_backend)
    }

    /// Backend for the home page's traffic chart.
    pub fn home(config: &AppConfig) -> Result<Self, TransportError> {
        Self::new(&config.endpoints.home_backend)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Visitor counts per site, in the order the backend sent them.
    pub async fn visitors(&self) -> Result<Vec<ChartData>, TransportError> {
        let response = self.execute(self.client.post(self.url(VISITORS_PATH))).await?;
        response
            .json()
            .await
            .map_err(|err| TransportError::Client(format!("malformed visitors: {err}")))
    }

    async fn send(&self, request: RequestBuilder) -> Result<(), TransportError> {
        self.execute(request).await.map(drop)
    }

    /// Sends the request and turns any non-2xx reply into `Status` with the
    /// body kept as the message.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await.map_err(client_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn post_json(&self, path: &str, body: &Value) -> Result<(), TransportError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn post(&self, path: &str) -> Result<(), TransportError> {
        self.send(self.client.post(self.url(path))).await
    }

    async fn delete(&self, path: &str) -> Result<(), TransportError> {
        self.send(self.client.delete(self.url(path))).await
    }
}

impl VoteSink for HttpBackend {
    /// Posts the batch on the current tokio runtime without waiting for it.
    /// Outside a runtime the batch is dropped.
    fn deliver(&self, batch: VoteBatch) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no runtime to deliver {} thumbs votes", batch.len());
            return;
        };

        let request = self.client.post(self.url(UPDATE_THUMBS_PATH)).json(&batch);
        let backend = self.clone();
        runtime.spawn(async move {
            if let Err(err) = backend.send(request).await {
                tracing::warn!("thumbs delivery failed: {err}");
            }
        });
    }
}

fn client_error(err: reqwest::Error) -> TransportError {
    TransportError::Client(err.to_string())
}
