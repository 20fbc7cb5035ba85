use clap::Parser;
use nt_feeds::{handle_command, init_logging, FeedCommands, FeedManager, HttpFeedFetcher};
use nt_storage::{create_store, StorageKind};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod config;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Collect news feeds into an annotated, deduplicated corpus", long_about = None)]
pub struct Cli {
    /// TOML file with feeds, data file and interval
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Where the JSON corpus is stored (default: news_articles.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[arg(long, global = true, default_value = "json", help = "Storage backend. Available: json (default), memory")]
    storage: StorageKind,
    #[arg(long, global = true, default_value = "rule-based", help = "Annotator used for topics and entities. Available: rule-based (default)")]
    annotator: String,
    #[command(subcommand)]
    command: FeedCommands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).await?,
        None => AppConfig::default(),
    };
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    let storage = create_store(cli.storage, &config.data_file);
    let annotator = nt_annotator::create_annotator(Some(nt_annotator::Config {
        name: Some(cli.annotator.clone()),
        ..Default::default()
    }))?;
    let fetcher = Arc::new(HttpFeedFetcher::new()?);

    let names: Vec<&str> = config.feeds.iter().map(|f| f.name.as_str()).collect();
    info!("🦗 Feeds configured: {}", names.join(", "));

    let manager = FeedManager::new(
        storage,
        fetcher,
        annotator,
        config.feeds.clone(),
        config.default_publication_date,
    );
    handle_command(cli.command, &manager, config.interval).await?;
    Ok(())
}
