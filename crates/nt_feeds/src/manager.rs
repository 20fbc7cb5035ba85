use chrono::{DateTime, FixedOffset};
use nt_core::{CorpusStore, FeedFetcher, FeedSource, Result, TextAnnotator};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

use crate::logging::Logger;
use crate::merge::merge;
use crate::normalize::normalize_all;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: String,
    pub fetched: usize,
    pub added: usize,
}

/// What one fetch cycle did, source by source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub sources: Vec<SourceReport>,
    /// Names of sources whose fetch failed.
    pub failed: Vec<String>,
    pub total_articles: usize,
}

impl CycleReport {
    pub fn added(&self) -> usize {
        self.sources.iter().map(|s| s.added).sum()
    }
}

pub struct FeedManager {
    storage: Arc<dyn CorpusStore>,
    fetcher: Arc<dyn FeedFetcher>,
    annotator: Arc<dyn TextAnnotator>,
    sources: Vec<FeedSource>,
    default_date: DateTime<FixedOffset>,
}

impl FeedManager {
    pub fn new(
        storage: Arc<dyn CorpusStore>,
        fetcher: Arc<dyn FeedFetcher>,
        annotator: Arc<dyn TextAnnotator>,
        sources: Vec<FeedSource>,
        default_date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            storage,
            fetcher,
            annotator,
            sources,
            default_date,
        }
    }

    pub fn storage(&self) -> &Arc<dyn CorpusStore> {
        &self.storage
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    /// Fetch every source once, merge new articles into the stored corpus and
    /// save it.
    ///
    /// A source that fails to fetch is logged and skipped. If `shutdown` flips
    /// to `true` the remaining sources are skipped, but whatever was merged so
    /// far is still saved. Failing to load the corpus aborts the cycle before
    /// anything is written.
    pub async fn run_cycle(&self, shutdown: Option<&watch::Receiver<bool>>) -> Result<CycleReport> {
        let mut corpus = self.storage.load().await?;
        info!("📚 Loaded {} articles from {} storage", corpus.len(), self.storage.name());

        let mut report = CycleReport::default();
        for source in &self.sources {
            if shutdown.map_or(false, |rx| *rx.borrow()) {
                info!("🛑 Shutdown requested, skipping remaining feeds");
                break;
            }

            let logger = Logger::for_source(&source.name);
            let entries = match self.fetcher.fetch(&source.url).await {
                Ok(entries) => entries,
                Err(e) => {
                    logger.warn(&format!("⚠️ Failed to fetch {}: {}", source.url, e));
                    report.failed.push(source.name.clone());
                    continue;
                }
            };
            logger.debug(&format!("Received {} entries", entries.len()));

            let candidates = normalize_all(&entries, self.default_date, self.annotator.as_ref());
            let outcome = merge(corpus, candidates);
            corpus = outcome.corpus;
            if outcome.added > 0 {
                logger.info(&format!("📰 Fetched {} new articles from {}", outcome.added, source.name));
            }

            report.sources.push(SourceReport {
                source: source.name.clone(),
                fetched: entries.len(),
                added: outcome.added,
            });
        }

        self.storage.save(&corpus).await?;
        report.total_articles = corpus.len();
        info!(
            "💾 Saved {} articles ({} new, {} feeds failed)",
            report.total_articles,
            report.added(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Run cycles back to back, `interval` apart, until `shutdown` becomes `true`.
    pub async fn run_periodic(&self, interval: Duration, mut shutdown: watch::Receiver<bool>) {
        info!("🔁 Fetching {} feeds every {}s", self.sources.len(), interval.as_secs());
        loop {
            if *shutdown.borrow() {
                break;
            }
            if let Err(e) = self.run_cycle(Some(&shutdown)).await {
                error!("❌ Fetch cycle failed: {}", e);
            }
            if !wait_for_next_cycle(interval, &mut shutdown).await {
                break;
            }
        }
        info!("👋 Feed manager stopped");
    }
}

/// Sleep for `interval`. Returns `false` if shutdown was signalled first.
async fn wait_for_next_cycle(interval: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return true,
            changed = shutdown.changed() => match changed {
                Ok(()) if *shutdown.borrow() => return false,
                Ok(()) => continue,
                Err(_) => {
                    // Sender is gone, so no shutdown can arrive any more.
                    sleep.await;
                    return true;
                }
            },
        }
    }
}
