use std::fmt;

use crate::Result;

/// Coarse Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    ProperNoun,
    Noun,
    Number,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
    Verb,
    Adjective,
    Adverb,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self { text: text.into(), tag }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Gpe,
    Organization,
    /// Any label the pipeline does not collect (FACILITY, GSP, ...).
    Other(String),
}

/// One node of a chunked sentence: either a plain token or a labelled span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Token(TaggedToken),
    Entity {
        label: EntityLabel,
        tokens: Vec<TaggedToken>,
    },
}

/// The tokenizer, tagger and entity chunker used to annotate article text.
pub trait TextAnnotator: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Split text into word and punctuation tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Assign a part-of-speech tag to each token.
    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken>;

    /// Group tagged tokens into named-entity spans.
    fn chunk(&self, tagged: &[TaggedToken]) -> Result<Vec<Chunk>>;

    /// Whether the lowercased word is an English stopword.
    fn is_stopword(&self, word: &str) -> bool;
}
