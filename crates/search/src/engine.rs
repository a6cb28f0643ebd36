//! Relevance scoring and ranked search.

use std::time::Instant;

use crate::corpus;
use crate::doc::{ScoredDoc, SearchDoc};

/// Suggestion terms offered alongside partial title matches.
const CATEGORY_TERMS: [&str; 7] = [
    "archives",
    "monasteries",
    "festivals",
    "thangka",
    "manuscripts",
    "rumtek",
    "pemayangtse",
];

/// Suggestion lists are capped at this many entries.
const MAX_SUGGESTIONS: usize = 5;

/// Multi-word result sets drop entries scoring below this floor.
const MULTI_WORD_SCORE_FLOOR: f64 = 10.0;

/// In-memory search index over the heritage corpus.
///
/// Built once at startup and shared across request handlers.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    docs: Vec<SearchDoc>,
}

impl SearchIndex {
    /// Builds the index from the seed corpus.
    pub fn seeded() -> Self {
        Self {
            docs: corpus::all(),
        }
    }

    /// Builds an index over an arbitrary document set.
    pub fn with_docs(docs: Vec<SearchDoc>) -> Self {
        Self { docs }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns true if the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Ranked search over the corpus.
    ///
    /// Every document with a non-zero score is ranked highest-first;
    /// ties keep corpus order. Multi-word queries consider a wider
    /// slice (`limit * 2`) and then drop weak matches below the score
    /// floor before applying `limit`.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredDoc> {
        let start = Instant::now();

        let mut scored: Vec<ScoredDoc> = self
            .docs
            .iter()
            .filter_map(|doc| {
                let score = relevance_score(query, doc);
                (score > 0.0).then(|| ScoredDoc {
                    doc: doc.clone(),
                    relevance_score: score,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        if query.split_whitespace().count() > 1 {
            scored.truncate(limit * 2);
            scored.retain(|hit| hit.relevance_score >= MULTI_WORD_SCORE_FLOOR);
        }
        scored.truncate(limit);

        metrics::counter!("search_requests_total").increment(1);
        metrics::histogram!("search_duration_seconds").record(start.elapsed().as_secs_f64());
        tracing::debug!(hits = scored.len(), "search complete");

        scored
    }

    /// Autocomplete suggestions: document titles containing the query,
    /// then matching category terms, capped at five.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();

        for doc in &self.docs {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            if doc.title.to_lowercase().contains(&needle) {
                suggestions.push(doc.title.clone());
            }
        }

        for term in CATEGORY_TERMS {
            if term.contains(&needle) && !suggestions.iter().any(|s| s == term) {
                suggestions.push(term.to_string());
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Weighted relevance of a document for a query.
///
/// Combines phrase and per-word containment over the full text with
/// field-specific weights (title, tags, description, monastery, type,
/// auxiliary attributes) and a fuzzy similarity term for near-miss
/// spellings. Zero means no relation at all.
pub fn relevance_score(query: &str, doc: &SearchDoc) -> f64 {
    let query = query.to_lowercase();
    let query = query.trim();
    let words: Vec<&str> = query.split_whitespace().collect();
    let mut score = 0.0;

    let full_text = doc.full_text();

    // Exact phrase match carries the most weight.
    if full_text.contains(query) {
        score += 50.0;
    }

    let words_found = words.iter().filter(|word| full_text.contains(**word)).count();
    if words_found == words.len() && words.len() > 1 {
        score += 40.0;
    }

    for word in &words {
        if full_text.contains(*word) {
            score += 15.0;
        }
    }

    let title = doc.title.to_lowercase();
    if query == title {
        score += 100.0;
    } else if title.contains(query) {
        score += 70.0;
    }

    for tag in &doc.tags {
        let tag = tag.to_lowercase();
        if query == tag {
            score += 30.0;
        } else if tag.contains(query) {
            score += 20.0;
        } else if words.iter().any(|word| tag.contains(*word)) {
            score += 12.0;
        }
    }

    let description = doc.description.to_lowercase();
    if description.contains(query) {
        score += 25.0;
    } else if words.iter().any(|word| description.contains(*word)) {
        score += 8.0;
    }

    if let Some(monastery) = &doc.monastery {
        let monastery = monastery.to_lowercase();
        if monastery.contains(query) {
            score += 20.0;
        } else if words.iter().any(|word| monastery.contains(*word)) {
            score += 10.0;
        }
    }

    if let Some(kind) = &doc.kind {
        let kind = kind.to_lowercase();
        if query == kind {
            score += 25.0;
        } else if kind.contains(query) {
            score += 15.0;
        } else if words.iter().any(|word| kind.contains(*word)) {
            score += 8.0;
        }
    }

    for extra in &doc.extras {
        let extra = extra.to_lowercase();
        if extra.contains(query) {
            score += 15.0;
        } else if words.iter().any(|word| extra.contains(*word)) {
            score += 6.0;
        }
    }

    // Fuzzy term catches near-miss spellings of prominent fields.
    for field in [Some(&doc.title), doc.monastery.as_ref(), doc.kind.as_ref()]
        .into_iter()
        .flatten()
    {
        let similarity = strsim::normalized_levenshtein(query, &field.to_lowercase());
        if similarity > 0.7 {
            score += similarity * 10.0;
        } else if similarity > 0.5 {
            score += similarity * 5.0;
        }
    }

    if words.len() > 1 && (words_found as f64) >= (words.len() as f64) * 0.7 {
        score += 15.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::DocCategory;

    fn index() -> SearchIndex {
        SearchIndex::seeded()
    }

    #[test]
    fn test_exact_tag_match_ranks_the_tagged_document_first() {
        let results = index().search("thangka", 10);
        assert!(!results.is_empty());
        assert_eq!(results[0].doc.id, "archive_1");
        assert_eq!(results[0].doc.category, DocCategory::Archive);
        assert!(results[0].relevance_score > 0.0);
    }

    #[test]
    fn test_title_match_outranks_attribute_matches() {
        let results = index().search("rumtek", 10);
        assert_eq!(results[0].doc.id, "monastery_1");
    }

    #[test]
    fn test_exact_title_query_gets_the_top_score() {
        let results = index().search("sacred manuscripts", 10);
        assert_eq!(results[0].doc.id, "archive_2");

        let exact = relevance_score("sacred manuscripts", &results[0].doc);
        let partial = relevance_score("manuscripts", &results[0].doc);
        assert!(exact > partial);
    }

    #[test]
    fn test_scores_are_sorted_descending() {
        let results = index().search("monastery", 21);
        for pair in results.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_limit_caps_the_result_count() {
        let results = index().search("monastery", 3);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let results = index().search("zzz", 10);
        assert!(results.is_empty());
    }

    #[test]
    fn test_multi_word_query_drops_weak_matches() {
        let results = index().search("golden roof", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc.id, "monastery_1");
        assert!(results[0].relevance_score >= MULTI_WORD_SCORE_FLOOR);
    }

    #[test]
    fn test_fuzzy_term_tolerates_a_typo() {
        let results = index().search("sacred manuscrips", 10);
        assert!(results.iter().any(|hit| hit.doc.id == "archive_2"));
    }

    #[test]
    fn test_case_is_ignored() {
        let lower = index().search("losar", 5);
        let upper = index().search("LOSAR", 5);
        assert_eq!(lower.len(), upper.len());
        assert_eq!(lower[0].doc.id, upper[0].doc.id);
        assert_eq!(lower[0].doc.id, "festival_1");
    }

    #[test]
    fn test_suggestions_list_matching_titles_in_corpus_order() {
        let suggestions = index().suggestions("fest");
        assert_eq!(
            suggestions,
            vec![
                "Festival Costumes",
                "Losar Festival",
                "Tihar Festival",
                "Bumchu Festival",
                "Dasain Festival",
            ]
        );
    }

    #[test]
    fn test_suggestions_append_category_terms() {
        let suggestions = index().suggestions("rum");
        assert_eq!(suggestions, vec!["Musical Instruments", "Rumtek Monastery", "rumtek"]);
    }

    #[test]
    fn test_suggestions_for_unknown_query_are_empty() {
        assert!(index().suggestions("zzz").is_empty());
    }

    #[test]
    fn test_suggestions_are_capped_at_five() {
        assert!(index().suggestions("a").len() <= 5);
    }

    #[test]
    fn test_empty_index_finds_nothing() {
        let index = SearchIndex::with_docs(Vec::new());
        assert!(index.is_empty());
        assert!(index.search("thangka", 10).is_empty());
    }
}
