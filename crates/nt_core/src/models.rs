use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup behind `url`. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}
