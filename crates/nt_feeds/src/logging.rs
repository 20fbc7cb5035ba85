use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Tags every line with the feed it concerns, e.g. `[BBC News - World]`.
#[derive(Debug, Clone)]
pub struct Logger {
    tag: String,
}

impl Logger {
    pub fn for_source(name: &str) -> Self {
        Self {
            tag: format!("[{}]", name),
        }
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{} {}", self.tag, message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{} {}", self.tag, message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{} {}", self.tag, message);
    }
}

/// Install the fmt subscriber once. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // Another subscriber may have been installed in between; keep it.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tag() {
        assert_eq!(Logger::for_source("BBC News - World").tag, "[BBC News - World]");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        Logger::for_source("Reuters").info("still logging");
    }
}
