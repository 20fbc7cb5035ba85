pub mod annotator;
pub mod error;
pub mod feed;
pub mod query;
pub mod storage;
pub mod types;

pub use annotator::{Chunk, EntityLabel, PosTag, TaggedToken, TextAnnotator};
pub use error::{Error, Result};
pub use feed::FeedFetcher;
pub use query::{filter_articles, ArticleFilter};
pub use storage::CorpusStore;
pub use types::{Annotation, Article, FeedEntry, FeedSource, NamedEntities, NO_SUMMARY, NO_TITLE};
