use std::sync::Arc;

use nt_core::{Error, Result, TextAnnotator};
use tracing::info;

use crate::Config;

pub mod rule_based;

pub use rule_based::RuleBasedAnnotator;

pub const AVAILABLE: &[&str] = &["rule-based"];

/// Build the annotator named in `config` (the rule-based one by default).
pub fn create_annotator(config: Option<Config>) -> Result<Arc<dyn TextAnnotator>> {
    let config = config.unwrap_or_default();
    let name = config.name.as_deref().unwrap_or("rule-based");

    let annotator: Arc<dyn TextAnnotator> = match name {
        "rule-based" | "rules" => Arc::new(RuleBasedAnnotator::new(config.max_tokens)),
        other => {
            return Err(Error::Config(format!(
                "unknown annotator '{}', available: {}",
                other,
                AVAILABLE.join(", ")
            )))
        }
    };
    info!("🧠 Using {} annotator", annotator.name());
    Ok(annotator)
}
