use nt_core::{CorpusStore, Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

pub mod backends;

pub use backends::*;

pub trait StorageBackend: CorpusStore + fmt::Debug {
    /// Human readable location of the corpus, for logs.
    fn description(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Json,
    Memory,
}

impl FromStr for StorageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!(
                "unknown storage backend '{}', expected json or memory",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

pub fn create_store(kind: StorageKind, data_file: &Path) -> Arc<dyn CorpusStore> {
    match kind {
        StorageKind::Json => announce(JsonFileStore::new(data_file)),
        StorageKind::Memory => announce(InMemoryStore::new()),
    }
}

fn announce<S: StorageBackend + 'static>(store: S) -> Arc<dyn CorpusStore> {
    info!("🏦 Storage backend initialized ({})", store.description());
    Arc::new(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_storage_kind() {
        assert_eq!("json".parse::<StorageKind>().unwrap(), StorageKind::Json);
        assert_eq!("Memory".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert!("qdrant".parse::<StorageKind>().is_err());
    }

    #[test]
    fn test_create_store_names() {
        let store = create_store(StorageKind::Memory, Path::new("unused.json"));
        assert_eq!(store.name(), "memory");
        let store = create_store(StorageKind::Json, Path::new("news_articles.json"));
        assert_eq!(store.name(), "json");
    }
}
