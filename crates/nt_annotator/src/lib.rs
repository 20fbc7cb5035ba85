use std::collections::BTreeSet;

use nt_core::{Annotation, Chunk, EntityLabel, NamedEntities, Result, TextAnnotator};
use tracing::warn;

pub mod annotators;
pub mod lexicon;
pub mod stopwords;

#[derive(Debug, Clone)]
pub struct Config {
    pub name: Option<String>,
    /// Inputs longer than this many tokens are not chunked.
    pub max_tokens: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            max_tokens: annotators::rule_based::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Lowercased, alphanumeric, stopword-free keywords of `text`.
pub fn extract_topics(annotator: &dyn TextAnnotator, text: &str) -> BTreeSet<String> {
    annotator
        .tokenize(text)
        .into_iter()
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphanumeric))
        .map(|token| token.to_lowercase())
        .filter(|token| !annotator.is_stopword(token))
        .collect()
}

/// People, locations and organizations mentioned in `text`, in order of appearance.
pub fn extract_named_entities(annotator: &dyn TextAnnotator, text: &str) -> Result<NamedEntities> {
    let tokens = annotator.tokenize(text);
    let tagged = annotator.pos_tag(&tokens);
    let chunks = annotator.chunk(&tagged)?;

    let mut entities = NamedEntities::default();
    for chunk in chunks {
        let Chunk::Entity { label, tokens } = chunk else {
            continue;
        };
        let name = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        match label {
            EntityLabel::Person => entities.people.push(name),
            EntityLabel::Gpe => entities.locations.push(name),
            EntityLabel::Organization => entities.organizations.push(name),
            EntityLabel::Other(_) => {}
        }
    }
    Ok(entities)
}

/// Topics and entities for `text`. Never fails: if entity chunking errors the
/// entities are left empty.
pub fn annotate(annotator: &dyn TextAnnotator, text: &str) -> Annotation {
    let topics = extract_topics(annotator, text);
    let entities = extract_named_entities(annotator, text).unwrap_or_else(|e| {
        warn!("⚠️ Error extracting named entities: {}", e);
        NamedEntities::default()
    });
    Annotation { topics, entities }
}

pub use annotators::create_annotator;
