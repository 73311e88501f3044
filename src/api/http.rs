//! HTTP client for the Moonitor API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use moonitor_dashboard::api::{DashboardApi, HttpApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpApi::builder()
//!         .endpoint("http://localhost:5000")
//!         .build()?;
//!
//!     let stats = api.stats().await?;
//!     println!("{} messages analysed", stats.total_messages);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, DashboardApi, MessagePage, MessageQuery, StatsSummary};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Dashboard API backed by the Moonitor web server.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    endpoint: String,
    description: String,
}

impl HttpApi {
    /// Create a new builder for configuring the client.
    pub fn builder() -> HttpApiBuilder {
        HttpApiBuilder::default()
    }

    /// Base URL every endpoint is resolved against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.endpoint, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Http {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl DashboardApi for HttpApi {
    async fn stats(&self) -> Result<StatsSummary, ApiError> {
        self.get_json("stats", &[]).await
    }

    async fn channels(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("channels", &[]).await
    }

    async fn messages(&self, query: &MessageQuery) -> Result<MessagePage, ApiError> {
        self.get_json("messages", &query.to_pairs()).await
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for HttpApi.
#[derive(Debug, Default)]
pub struct HttpApiBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl HttpApiBuilder {
    /// Set the server base URL (default: `http://localhost:5000`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpApi, ApiError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| "http://localhost:5000".to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(endpoint));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Ok(HttpApi {
            client,
            description: format!("api: {}", endpoint),
            endpoint,
        })
    }
}
