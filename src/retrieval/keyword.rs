/// Sparse keyword index over FAQ questions and tags.
///
/// Backs the fallback tier: when semantic confidence is low, query keywords
/// are matched against this index to find "Did you mean" candidates.
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::kb::KnowledgeBase;

/// Question words and glue that carry no retrieval signal.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "what", "how", "why", "when", "where", "who", "is", "are", "do", "does", "can", "could",
        "would", "should", "the", "a", "an", "in", "on", "at", "to", "for", "with", "by", "about",
        "as", "of", "from", "your", "our",
    ])
});

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("invalid word regex"));

/// Extract searchable keywords from free text.
///
/// Lowercases, tokenizes on word boundaries, then drops stop words and tokens
/// of two characters or fewer. Order of appearance is preserved.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w) && w.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Inverted index: keyword → ascending entry indices.
///
/// Keys come from two sources per entry: keywords extracted from the question
/// text, and the entry's tags lowercased verbatim. Tags bypass the stop-word
/// and length filters, so a multiword tag like "money back" is a single key
/// and only matches a lookup of that exact string.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    groups: HashMap<String, Vec<usize>>,
}

impl KeywordIndex {
    #[must_use]
    pub fn build(kb: &KnowledgeBase) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in kb.entries().iter().enumerate() {
            let mut keys = extract_keywords(&entry.question);
            keys.extend(entry.tags.iter().map(|t| t.to_lowercase()));

            for key in keys {
                let group = groups.entry(key).or_default();
                // Entries are visited in ascending order, so a duplicate key
                // within one entry can only repeat the last pushed index.
                if group.last() != Some(&idx) {
                    group.push(idx);
                }
            }
        }

        Self { groups }
    }

    /// Entry indices for a keyword, ascending. Empty for unknown keywords.
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> &[usize] {
        self.groups.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.groups.contains_key(keyword)
    }

    /// Number of distinct keys in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
