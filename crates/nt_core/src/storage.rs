use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

/// Whole-document persistence for the article corpus.
#[async_trait]
pub trait CorpusStore: Send + Sync {
    fn name(&self) -> &str;

    /// Load the full corpus. A missing or corrupt document yields an empty corpus.
    async fn load(&self) -> Result<Vec<Article>>;

    /// Replace the stored corpus with `articles`.
    async fn save(&self, articles: &[Article]) -> Result<()>;
}
