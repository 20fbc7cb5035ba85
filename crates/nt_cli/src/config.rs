use chrono::{DateTime, FixedOffset, Utc};
use nt_core::{Error, FeedSource, Result};
use nt_storage::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3600);

pub fn default_feeds() -> Vec<FeedSource> {
    vec![
        FeedSource::new("TechCrunch", "https://techcrunch.com/feed"),
        FeedSource::new("BBC News - World", "https://feeds.bbci.co.uk/news/world/rss.xml"),
        FeedSource::new("Reuters", "https://feeds.reuters.com/Reuters/worldNews"),
    ]
}

/// Settings read from `--config`. Every key is optional.
///
/// ```toml
/// data_file = "corpus.json"
/// interval_secs = 1800
///
/// [[feeds]]
/// name = "BBC News - World"
/// url = "https://feeds.bbci.co.uk/news/world/rss.xml"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    data_file: Option<PathBuf>,
    #[serde(default)]
    interval_secs: Option<u64>,
    #[serde(default)]
    feeds: Option<Vec<FeedSource>>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feeds: Vec<FeedSource>,
    pub data_file: PathBuf,
    pub interval: Duration,
    /// Publication date for entries whose own date is missing or unreadable.
    /// Fixed when the config is built.
    pub default_publication_date: DateTime<FixedOffset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            interval: DEFAULT_INTERVAL,
            default_publication_date: Utc::now().fixed_offset(),
        }
    }
}

impl AppConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;

        let mut config = Self::default();
        if let Some(data_file) = file.data_file {
            config.data_file = data_file;
        }
        if let Some(secs) = file.interval_secs {
            config.interval = Duration::from_secs(secs);
        }
        if let Some(feeds) = file.feeds {
            config.feeds = feeds;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(Error::Config("interval must be greater than zero".to_string()));
        }
        if self.feeds.is_empty() {
            return Err(Error::Config("at least one feed is required".to_string()));
        }
        for feed in &self.feeds {
            let url = Url::parse(&feed.url)
                .map_err(|e| Error::Config(format!("feed '{}' has an invalid url: {}", feed.name, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "feed '{}' must use http or https, got {}",
                    feed.name,
                    url.scheme()
                )));
            }
        }
        Ok(())
    }
}
