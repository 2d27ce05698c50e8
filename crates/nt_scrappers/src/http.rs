use async_trait::async_trait;
use nt_core::{Config, PageFetcher, Result};
use tracing::debug;

/// Plain GET fetcher with a fixed user agent and timeout. One attempt per call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("🌐 GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("🌐 {} {}", response.status(), url);
        Ok(response.text().await?)
    }
}
