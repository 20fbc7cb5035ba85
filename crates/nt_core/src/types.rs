use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No Title";
pub const NO_SUMMARY: &str = "No Summary";

/// A normalized, annotated news article as stored in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    #[serde(with = "iso8601")]
    pub publication_date: DateTime<FixedOffset>,
    /// Identity key used for deduplication. Empty when the entry had no link.
    pub source_url: String,
    pub topics: BTreeSet<String>,
    pub named_entities: NamedEntities,
}

/// Entity names in order of first appearance. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntities {
    pub people: Vec<String>,
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
}

impl NamedEntities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.locations.is_empty() && self.organizations.is_empty()
    }
}

/// Output of running the annotator over a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub topics: BTreeSet<String>,
    pub entities: NamedEntities,
}

/// A raw item as handed back by a feed parser. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Serde adapter for publication dates.
///
/// Writes RFC 3339. Reads RFC 3339 and also naive ISO-8601 timestamps
/// (no offset), which are taken as UTC. Only years 0000 to 9999 can be
/// written, since nothing else reads back.
pub mod iso8601 {
    use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime};
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

    pub fn is_representable(date: &DateTime<FixedOffset>) -> bool {
        YEARS.contains(&date.year())
    }

    pub fn serialize<S>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !is_representable(date) {
            return Err(ser::Error::custom(format!("year {} cannot be stored", date.year())));
        }
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 timestamp: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
    }
}
