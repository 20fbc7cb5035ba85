use chrono::{DateTime, FixedOffset};

use crate::types::Article;

/// Criteria for selecting articles from a corpus. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// An article matches when any keyword occurs, case-insensitively, in its
    /// title or description.
    pub keywords: Vec<String>,
    /// Inclusive lower bound on the publication date.
    pub start: Option<DateTime<FixedOffset>>,
    /// Inclusive upper bound on the publication date.
    pub end: Option<DateTime<FixedOffset>>,
}

impl ArticleFilter {
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn since(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        if !self.keywords.is_empty() {
            let title = article.title.to_lowercase();
            let description = article.description.to_lowercase();
            let hit = self.keywords.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                title.contains(&keyword) || description.contains(&keyword)
            });
            if !hit {
                return false;
            }
        }
        if let Some(start) = self.start {
            if article.publication_date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if article.publication_date > end {
                return false;
            }
        }
        true
    }
}

/// Return the articles matching `filter`, in corpus order.
pub fn filter_articles<'a>(articles: &'a [Article], filter: &ArticleFilter) -> Vec<&'a Article> {
    articles.iter().filter(|article| filter.matches(article)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedEntities;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, d, 12, 0, 0)
            .unwrap()
    }

    fn article(title: &str, description: &str, date: DateTime<FixedOffset>) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            publication_date: date,
            source_url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            topics: Default::default(),
            named_entities: NamedEntities::default(),
        }
    }

    fn corpus() -> Vec<Article> {
        vec![
            article("Global Markets Rally", "Shares up", day(1)),
            article("Local Sports Update", "The home team won", day(2)),
            article("Markets Crash Again", "Shares down", day(3)),
        ]
    }

    #[test]
    fn test_keyword_filter_keeps_order() {
        let corpus = corpus();
        let filter = ArticleFilter::default().with_keywords(["markets"]);
        let titles: Vec<&str> = filter_articles(&corpus, &filter)
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Global Markets Rally", "Markets Crash Again"]);
    }

    #[test]
    fn test_keyword_matches_description_case_insensitively() {
        let corpus = corpus();
        let filter = ArticleFilter::default().with_keywords(["HOME", "nothing"]);
        let found = filter_articles(&corpus, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Local Sports Update");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let corpus = corpus();
        let filter = ArticleFilter::default().since(day(2)).until(day(3));
        let found = filter_articles(&corpus, &filter);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Local Sports Update");
        assert_eq!(found[1].title, "Markets Crash Again");
    }

    #[test]
    fn test_all_criteria_must_match() {
        let corpus = corpus();
        let filter = ArticleFilter::default().with_keywords(["markets"]).until(day(2));
        let found = filter_articles(&corpus, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Global Markets Rally");
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let corpus = corpus();
        assert_eq!(filter_articles(&corpus, &ArticleFilter::default()).len(), 3);
    }
}
