use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw markup at `url`. Non-2xx responses are errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}
