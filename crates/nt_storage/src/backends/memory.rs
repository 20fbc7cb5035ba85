use async_trait::async_trait;
use nt_core::{Article, CorpusStore, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::StorageBackend;

/// Corpus held in process memory; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(RwLock::new(articles)),
        }
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

impl StorageBackend for InMemoryStore {
    fn description(&self) -> String {
        "in-memory corpus".to_string()
    }
}

#[async_trait]
impl CorpusStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn save(&self, articles: &[Article]) -> Result<()> {
        let mut store = self.articles.write().await;
        *store = articles.to_vec();
        Ok(())
    }
}
