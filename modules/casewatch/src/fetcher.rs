use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, WatchError};

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the body as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain HTTPS GET with a bounded per-request timeout. No retries: the next
/// scheduled cycle is the retry.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WatchError::Network(format!("GET {url} returned {status}")));
        }

        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
