use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use nt_annotator::annotate;
use nt_core::types::iso8601;
use nt_core::{Annotation, Article, Error, FeedEntry, Result, TextAnnotator, NO_SUMMARY, NO_TITLE};
use tracing::debug;

/// Layouts with an explicit offset, tried after RFC 2822 and RFC 3339.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
];

/// Layouts without an offset; the result is taken as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

/// Parse a feed timestamp, accepting the layouts feeds commonly use.
///
/// Dates outside years 0000 to 9999 are rejected so they never reach storage.
pub fn parse_publication_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::DateParse("empty date".to_string()));
    }
    let date = parse_any_layout(raw)?;
    if !iso8601::is_representable(&date) {
        return Err(Error::DateParse(format!("year out of range: {}", raw)));
    }
    Ok(date)
}

fn parse_any_layout(raw: &str) -> Result<DateTime<FixedOffset>> {

    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Ok(date);
    }
    // RFC 2822 does not allow "UTC" as a zone name, but feeds use it anyway.
    if let Some(stripped) = raw.strip_suffix(" UTC").or_else(|| raw.strip_suffix(" Z")) {
        if let Ok(date) = DateTime::parse_from_rfc2822(&format!("{} +0000", stripped)) {
            return Ok(date);
        }
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date);
    }
    for format in ZONED_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(raw, format) {
            return Ok(date);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(naive.and_utc().fixed_offset());
            }
        }
    }

    Err(Error::DateParse(raw.to_string()))
}

/// Turn a raw feed entry into an annotated article.
///
/// Missing fields get sentinel values and a missing or unparseable date
/// becomes `default_date`, so this never fails.
pub fn normalize(
    entry: &FeedEntry,
    default_date: DateTime<FixedOffset>,
    annotator: &dyn TextAnnotator,
) -> Article {
    let publication_date = match entry.published.as_deref() {
        Some(raw) => parse_publication_date(raw).unwrap_or_else(|e| {
            debug!("Using default publication date: {}", e);
            default_date
        }),
        None => default_date,
    };

    // Sentinels are not article text, so they are left out of the annotation input.
    let text = format!(
        "{} {}",
        entry.title.as_deref().unwrap_or_default(),
        entry.summary.as_deref().unwrap_or_default()
    );
    let Annotation { topics, entities } = annotate(annotator, &text);

    Article {
        title: entry.title.clone().unwrap_or_else(|| NO_TITLE.to_string()),
        description: entry.summary.clone().unwrap_or_else(|| NO_SUMMARY.to_string()),
        publication_date,
        source_url: entry.link.clone().unwrap_or_default(),
        topics,
        named_entities: entities,
    }
}

pub fn normalize_all(
    entries: &[FeedEntry],
    default_date: DateTime<FixedOffset>,
    annotator: &dyn TextAnnotator,
) -> Vec<Article> {
    entries
        .iter()
        .map(|entry| normalize(entry, default_date, annotator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nt_annotator::annotators::RuleBasedAnnotator;
    use nt_core::{Chunk, NamedEntities, TaggedToken};

    fn default_date() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .unwrap()
    }

    #[derive(Debug)]
    struct BrokenChunker(RuleBasedAnnotator);

    impl TextAnnotator for BrokenChunker {
        fn name(&self) -> &str {
            "broken"
        }

        fn tokenize(&self, text: &str) -> Vec<String> {
            self.0.tokenize(text)
        }

        fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
            self.0.pos_tag(tokens)
        }

        fn chunk(&self, _tagged: &[TaggedToken]) -> Result<Vec<Chunk>> {
            Err(Error::Annotation("model not loaded".to_string()))
        }

        fn is_stopword(&self, word: &str) -> bool {
            self.0.is_stopword(word)
        }
    }

    #[test]
    fn test_parse_rfc2822_and_rfc3339() {
        let date = parse_publication_date("Tue, 05 Mar 2024 14:30:00 GMT").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T14:30:00+00:00");

        let date = parse_publication_date("Tue, 05 Mar 2024 14:30:00 -0500").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T14:30:00-05:00");

        let date = parse_publication_date("2024-03-05T14:30:00+02:00").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T14:30:00+02:00");
    }

    #[test]
    fn test_parse_lenient_layouts() {
        let date = parse_publication_date("Tue, 05 Mar 2024 14:30:00 UTC").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T14:30:00+00:00");

        let date = parse_publication_date(" 2024-03-05 14:30:00 ").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T14:30:00+00:00");

        let date = parse_publication_date("2024-03-05").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T00:00:00+00:00");

        let date = parse_publication_date("March 5, 2024").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-05T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_publication_date("soon"), Err(Error::DateParse(_))));
        assert!(parse_publication_date("").is_err());
    }

    #[test]
    fn test_parse_rejects_unstorable_years() {
        for raw in ["+10000-01-01", "+10000-01-01T00:00:00+0000", "-0001-06-01T00:00:00+00:00"] {
            assert!(
                matches!(parse_publication_date(raw), Err(Error::DateParse(_))),
                "accepted {}",
                raw
            );
        }
        assert!(parse_publication_date("9999-12-31T23:59:59+00:00").is_ok());
    }

    #[test]
    fn test_normalize_far_future_date_uses_default() {
        let annotator = RuleBasedAnnotator::default();
        let entry = FeedEntry {
            title: Some("Time capsule".to_string()),
            published: Some("+10000-01-01T00:00:00+0000".to_string()),
            link: Some("https://example.com/capsule".to_string()),
            ..FeedEntry::default()
        };
        let article = normalize(&entry, default_date(), &annotator);
        assert_eq!(article.publication_date, default_date());
    }

    #[test]
    fn test_normalize_empty_entry() {
        let annotator = RuleBasedAnnotator::default();
        let article = normalize(&FeedEntry::default(), default_date(), &annotator);
        assert_eq!(article.title, "No Title");
        assert_eq!(article.description, "No Summary");
        assert_eq!(article.publication_date, default_date());
        assert_eq!(article.source_url, "");
        assert!(article.topics.is_empty());
        assert_eq!(article.named_entities, NamedEntities::default());
    }

    #[test]
    fn test_normalize_full_entry() {
        let annotator = RuleBasedAnnotator::default();
        let entry = FeedEntry {
            title: Some("Floods hit Germany".to_string()),
            summary: Some("Chancellor Olaf Scholz visited the region.".to_string()),
            published: Some("Wed, 17 Jul 2024 08:00:00 +0200".to_string()),
            link: Some("https://example.com/floods".to_string()),
        };
        let article = normalize(&entry, default_date(), &annotator);

        assert_eq!(article.title, "Floods hit Germany");
        assert_eq!(article.publication_date.to_rfc3339(), "2024-07-17T08:00:00+02:00");
        assert_eq!(article.source_url, "https://example.com/floods");
        for topic in ["floods", "hit", "germany", "chancellor", "olaf", "scholz", "visited", "region"] {
            assert!(article.topics.contains(topic), "missing topic {}", topic);
        }
        assert!(!article.topics.contains("the"));
        assert_eq!(article.named_entities.locations, vec!["Germany"]);
        assert_eq!(article.named_entities.people, vec!["Olaf Scholz"]);
    }

    #[test]
    fn test_normalize_bad_date_uses_default() {
        let annotator = RuleBasedAnnotator::default();
        let entry = FeedEntry {
            title: Some("Something happened".to_string()),
            published: Some("sometime last week".to_string()),
            ..FeedEntry::default()
        };
        let article = normalize(&entry, default_date(), &annotator);
        assert_eq!(article.publication_date, default_date());
        assert_eq!(article.description, "No Summary");
    }

    #[test]
    fn test_normalize_survives_chunker_failure() {
        let annotator = BrokenChunker(RuleBasedAnnotator::default());
        let entries = vec![
            FeedEntry {
                title: Some("Talks in Paris".to_string()),
                link: Some("https://example.com/a".to_string()),
                ..FeedEntry::default()
            },
            FeedEntry {
                title: Some("Storm nears Miami".to_string()),
                link: Some("https://example.com/b".to_string()),
                ..FeedEntry::default()
            },
        ];
        let articles = normalize_all(&entries, default_date(), &annotator);
        assert_eq!(articles.len(), 2);
        assert!(articles.iter().all(|a| a.named_entities.is_empty()));
        assert!(articles[0].topics.contains("paris"));
        assert!(articles[1].topics.contains("miami"));
    }
}
