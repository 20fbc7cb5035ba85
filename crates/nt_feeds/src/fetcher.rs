use async_trait::async_trait;
use nt_core::{Error, FeedEntry, FeedFetcher, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("nt/", env!("CARGO_PKG_VERSION"));

/// Downloads feeds over HTTP and parses them as RSS 2.0 or Atom.
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Feed(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("{} returned HTTP {}", url, status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Feed(format!("reading {} failed: {}", url, e)))?;
        debug!("Downloaded {} bytes from {}", body.len(), url);

        parse_feed(&body).map_err(|e| Error::Feed(format!("{}: {}", url, e)))
    }
}

/// Parse a feed document, trying RSS first and then Atom.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>> {
    if let Ok(channel) = rss::Channel::read_from(bytes) {
        return Ok(channel.items().iter().map(rss_entry).collect());
    }
    match atom_syndication::Feed::read_from(bytes) {
        Ok(feed) => Ok(feed.entries().iter().map(atom_entry).collect()),
        Err(e) => Err(Error::Feed(format!("not an RSS or Atom document ({})", e))),
    }
}

fn rss_entry(item: &rss::Item) -> FeedEntry {
    FeedEntry {
        title: item.title().map(str::to_string),
        summary: item.description().map(str::to_string),
        published: item.pub_date().map(str::to_string),
        link: item.link().map(str::to_string),
    }
}

fn atom_entry(entry: &atom_syndication::Entry) -> FeedEntry {
    let title = entry.title().as_str();
    let summary = entry
        .summary()
        .map(|s| s.as_str().to_string())
        .or_else(|| entry.content().and_then(|c| c.value()).map(str::to_string));
    let published = entry.published().unwrap_or_else(|| entry.updated());

    FeedEntry {
        title: (!title.is_empty()).then(|| title.to_string()),
        summary,
        published: Some(published.to_rfc3339()),
        link: entry_link(entry.links()).map(str::to_string),
    }
}

/// The entry's own page: the `alternate` link (also the default when `rel` is
/// omitted), else whatever link comes first.
fn entry_link(links: &[atom_syndication::Link]) -> Option<&str> {
    links
        .iter()
        .find(|link| link.rel() == "alternate")
        .or_else(|| links.first())
        .map(|link| link.href())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>World</title>
    <link>https://news.example.com</link>
    <description>World news</description>
    <item>
      <title>Markets rally in Tokyo</title>
      <description>Shares rose on Monday.</description>
      <pubDate>Mon, 04 Mar 2024 09:15:00 GMT</pubDate>
      <link>https://news.example.com/markets</link>
    </item>
    <item>
      <link>https://news.example.com/bare</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Tech</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2024-03-05T10:00:00Z</updated>
  <entry>
    <title>New chip announced</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <link href="https://tech.example.com/chip"/>
    <published>2024-03-05T08:30:00+01:00</published>
    <updated>2024-03-05T09:00:00+01:00</updated>
    <summary>A faster processor.</summary>
  </entry>
  <entry>
    <title></title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6b</id>
    <updated>2024-03-04T12:00:00Z</updated>
    <content type="text">Body only.</content>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss() {
        let entries = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Markets rally in Tokyo"));
        assert_eq!(entries[0].summary.as_deref(), Some("Shares rose on Monday."));
        assert_eq!(entries[0].published.as_deref(), Some("Mon, 04 Mar 2024 09:15:00 GMT"));
        assert_eq!(entries[0].link.as_deref(), Some("https://news.example.com/markets"));
        assert_eq!(
            entries[1],
            FeedEntry {
                link: Some("https://news.example.com/bare".to_string()),
                ..FeedEntry::default()
            }
        );
    }

    #[test]
    fn test_parse_atom() {
        let entries = parse_feed(ATOM.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("New chip announced"));
        assert_eq!(entries[0].summary.as_deref(), Some("A faster processor."));
        assert_eq!(entries[0].published.as_deref(), Some("2024-03-05T08:30:00+01:00"));
        assert_eq!(entries[0].link.as_deref(), Some("https://tech.example.com/chip"));

        assert_eq!(entries[1].title, None);
        assert_eq!(entries[1].summary.as_deref(), Some("Body only."));
        assert_eq!(entries[1].published.as_deref(), Some("2024-03-04T12:00:00+00:00"));
        assert_eq!(entries[1].link, None);
    }

    #[test]
    fn test_atom_prefers_alternate_link() {
        let feed = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Blog</title>
  <id>urn:example:blog</id>
  <updated>2024-03-05T10:00:00Z</updated>
  <entry>
    <title>Release notes</title>
    <id>urn:example:post-1</id>
    <link rel="self" href="https://blog.example.com/api/posts/1"/>
    <link rel="enclosure" type="audio/mpeg" href="https://cdn.example.com/1.mp3"/>
    <link rel="alternate" type="text/html" href="https://blog.example.com/posts/1"/>
    <updated>2024-03-05T09:00:00Z</updated>
  </entry>
  <entry>
    <title>Only a self link</title>
    <id>urn:example:post-2</id>
    <link rel="self" href="https://blog.example.com/api/posts/2"/>
    <updated>2024-03-05T09:30:00Z</updated>
  </entry>
</feed>"#;
        let entries = parse_feed(feed.as_bytes()).unwrap();
        assert_eq!(entries[0].link.as_deref(), Some("https://blog.example.com/posts/1"));
        assert_eq!(entries[1].link.as_deref(), Some("https://blog.example.com/api/posts/2"));
    }

    #[test]
    fn test_parse_garbage() {
        let result = parse_feed(b"<html><body>not a feed</body></html>");
        assert!(matches!(result, Err(Error::Feed(_))));
    }

    #[test]
    fn test_fetcher_builds() {
        assert!(HttpFeedFetcher::new().is_ok());
    }
}
