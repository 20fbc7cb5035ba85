use chrono::{DateTime, FixedOffset};
use clap::Subcommand;
use nt_core::{filter_articles, ArticleFilter, Result};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::manager::{CycleReport, FeedManager};
use crate::normalize::parse_publication_date;

/// A duration written like `1h`, `30m`, `1d` or `1h15m30s`. A bare number is seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_number = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    'd' => 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| format!("Duration is too long: {}", s))?;
                current_number.clear();
                has_number = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        if !current_number.is_empty() {
            let secs = current_number
                .parse::<u64>()
                .map_err(|_| format!("Invalid number in duration: {}", current_number))?;
            total_seconds = total_seconds
                .checked_add(secs)
                .ok_or_else(|| format!("Duration is too long: {}", s))?;
            has_number = true;
        }

        if !has_number {
            return Err("Duration must include a number".to_string());
        }
        if total_seconds == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum FeedCommands {
    /// Fetch all configured feeds, once or periodically
    Fetch {
        /// Run a single cycle and exit
        #[arg(long)]
        once: bool,
        /// Time between cycles in periodic mode (e.g. 1h, 30m, 1d, 1h15m30s)
        #[arg(long)]
        interval: Option<HumanDuration>,
    },
    /// Filter the stored corpus by keyword and publication date
    Search {
        /// Match articles whose title or description contains this keyword (repeatable)
        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,
        /// Only articles published at or after this date
        #[arg(long, value_parser = parse_publication_date)]
        since: Option<DateTime<FixedOffset>>,
        /// Only articles published at or before this date
        #[arg(long, value_parser = parse_publication_date)]
        until: Option<DateTime<FixedOffset>>,
        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List configured feed sources
    Feeds,
}

pub async fn handle_command(
    command: FeedCommands,
    manager: &FeedManager,
    default_interval: Duration,
) -> Result<()> {
    match command {
        FeedCommands::Fetch { once: true, .. } => {
            info!("🦗 Fetching {} feeds", manager.sources().len());
            let report = manager.run_cycle(None).await?;
            print_report(&report);
        }
        FeedCommands::Fetch { once: false, interval } => {
            let interval = interval.map(|i| i.0).unwrap_or(default_interval);
            let (tx, rx) = watch::channel(false);
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        info!("🛑 Ctrl-C received, stopping after the current feed");
                        let _ = tx.send(true);
                    }
                    Err(e) => warn!("⚠️ Unable to listen for Ctrl-C: {}", e),
                }
            });
            manager.run_periodic(interval, rx).await;
        }
        FeedCommands::Search {
            keywords,
            since,
            until,
            json,
        } => {
            let corpus = manager.storage().load().await?;
            let mut filter = ArticleFilter::default().with_keywords(keywords);
            if let Some(start) = since {
                filter = filter.since(start);
            }
            if let Some(end) = until {
                filter = filter.until(end);
            }

            let matches = filter_articles(&corpus, &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                println!("Found {} of {} articles", matches.len(), corpus.len());
                for article in matches {
                    println!(
                        "📰 {} {} - {}",
                        article.publication_date.format("%Y-%m-%d %H:%M"),
                        article.title,
                        article.source_url
                    );
                }
            }
        }
        FeedCommands::Feeds => {
            println!("Configured feeds:");
            for source in manager.sources() {
                println!("  - {} ({})", source.name, source.url);
            }
        }
    }
    Ok(())
}

fn print_report(report: &CycleReport) {
    for source in &report.sources {
        let emoji = if source.added > 0 { "🆕" } else { "⏭️" };
        println!("{} {}: {} new of {} entries", emoji, source.source, source.added, source.fetched);
    }
    for name in &report.failed {
        println!("⚠️ {}: fetch failed", name);
    }
    println!("📚 {} articles in corpus", report.total_articles);
}
