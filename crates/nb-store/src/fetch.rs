//! Remote notebook retrieval

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::FetchConfig;
use crate::{Error, Result};

/// Retrieves the text body behind a URI.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<String>;
}

/// HTTP(S) fetcher. Any non-2xx response is a failure.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::HttpClient {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, uri: &str) -> Result<String> {
        debug!(uri, "fetching remote notebook");
        let fetch_error = |e: reqwest::Error| Error::Fetch {
            uri: uri.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}
