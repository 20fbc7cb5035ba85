pub mod cli;
pub mod fetcher;
pub mod logging;
pub mod manager;
pub mod merge;
pub mod normalize;

pub use cli::{handle_command, FeedCommands, HumanDuration};
pub use fetcher::HttpFeedFetcher;
pub use logging::{init_logging, Logger};
pub use manager::{CycleReport, FeedManager, SourceReport};
pub use merge::{merge, MergeOutcome};
pub use normalize::{normalize, normalize_all, parse_publication_date};
