/// Suggestion engine for the keyword fallback tier.
use std::collections::BTreeSet;

use crate::kb::KnowledgeBase;
use crate::retrieval::keyword::{extract_keywords, KeywordIndex};

/// Collect up to `max_results` corpus questions sharing at least one keyword
/// with the query.
///
/// Candidate indices are unioned into a [`BTreeSet`], so the result is in
/// ascending entry order and independent of keyword order in the query. An
/// entry matched by several keywords appears once.
#[must_use]
pub fn suggest(
    query_text: &str,
    index: &KeywordIndex,
    kb: &KnowledgeBase,
    max_results: usize,
) -> Vec<String> {
    let mut candidates: BTreeSet<usize> = BTreeSet::new();

    for keyword in extract_keywords(query_text) {
        candidates.extend(index.lookup(&keyword).iter().copied());
    }

    candidates
        .into_iter()
        .take(max_results)
        .filter_map(|idx| kb.get(idx).map(|e| e.question.clone()))
        .collect()
}
