use std::collections::HashSet;

use nt_core::Article;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub corpus: Vec<Article>,
    pub added: usize,
}

/// Append the candidates whose `source_url` is not already in `existing`.
///
/// Candidates are only checked against `existing`, never against each other:
/// two candidates sharing a link are both appended. An empty `source_url` is
/// an ordinary key, so once the corpus holds an article without a link every
/// later link-less candidate is treated as already present.
pub fn merge(existing: Vec<Article>, candidates: Vec<Article>) -> MergeOutcome {
    let known: HashSet<&str> = existing.iter().map(|a| a.source_url.as_str()).collect();
    let fresh: Vec<Article> = candidates
        .into_iter()
        .filter(|candidate| !known.contains(candidate.source_url.as_str()))
        .collect();

    let added = fresh.len();
    let mut corpus = existing;
    corpus.extend(fresh);
    MergeOutcome { corpus, added }
}
