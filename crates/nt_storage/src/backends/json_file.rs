use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nt_core::{Article, CorpusStore, Error, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::StorageBackend;

pub const DEFAULT_DATA_FILE: &str = "news_articles.json";

/// Keeps the corpus as one pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for JsonFileStore {
    fn description(&self) -> String {
        format!("JSON file at {}", self.path.display())
    }
}

fn to_pretty_json(articles: &[Article]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    articles.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `contents` to a temporary file next to `path`, then rename it over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl CorpusStore for JsonFileStore {
    fn name(&self) -> &str {
        "json"
    }

    async fn load(&self) -> Result<Vec<Article>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No corpus at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Vec<Article>>(&bytes) {
            Ok(articles) => Ok(articles),
            Err(e) => {
                warn!(
                    "⚠️ Corpus at {} is unreadable ({}), starting fresh",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, articles: &[Article]) -> Result<()> {
        let contents = to_pretty_json(articles)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &contents))
            .await
            .map_err(|e| Error::Storage(format!("Failed to write corpus: {}", e)))??;
        debug!("Saved {} articles to {}", articles.len(), self.path.display());
        Ok(())
    }
}
