use async_trait::async_trait;
use crate::types::FeedEntry;
use crate::Result;

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch and parse the feed at `url`, returning its entries in feed order.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>>;
}
