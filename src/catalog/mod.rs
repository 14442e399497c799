//! Store-category resolution for free-text item names.
//!
//! The catalog wraps a static dictionary of known item names and a fuzzy
//! index built once over its keys. Lookup is exact first, then fuzzy with
//! a bounded score, then the [`OTHER_CATEGORY`] sentinel. Resolution never
//! fails: anything the catalog does not recognize is simply "Other".
//!
//! Both structures are plain values constructed up front and injected
//! where needed; nothing here is a global.

use std::collections::HashMap;

/// Sentinel category for items the catalog cannot place.
pub const OTHER_CATEGORY: &str = "Other";

/// Best fuzzy score (normalized distance, 0 = perfect) that still counts
/// as a match. Tuned against common typos like "chikken"; treat as
/// configuration, not a derived value.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.3;

const BUILTIN_CATALOG: &str = include_str!("grocery_catalog.json");

/// A fuzzy-matching index over a fixed set of keys.
///
/// Scores are normalized edit distances in `[0, 1]` where `0` is a
/// perfect match. Matching is case-insensitive and also considers the
/// token-sorted form of both sides, so "breast chicken" still lands
/// near "chicken breast".
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    key: String,
    folded: String,
    token_sorted: String,
}

/// A candidate returned by [`FuzzyIndex::best_match`].
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub key: String,
    pub score: f64,
}

impl FuzzyIndex {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                let folded = fold(&key);
                let token_sorted = sort_tokens(&folded);
                IndexEntry {
                    key,
                    folded,
                    token_sorted,
                }
            })
            .collect();
        Self { entries }
    }

    /// Return the lowest-scoring candidate for `query`, or `None` when the
    /// index is empty. Ties keep the earliest key, so results are stable
    /// for a given dictionary order.
    pub fn best_match(&self, query: &str) -> Option<FuzzyMatch> {
        let folded = fold(query);
        let token_sorted = sort_tokens(&folded);

        let mut best: Option<FuzzyMatch> = None;
        for entry in &self.entries {
            let whole = 1.0 - strsim::normalized_levenshtein(&folded, &entry.folded);
            let tokens = 1.0 - strsim::normalized_levenshtein(&token_sorted, &entry.token_sorted);
            let score = whole.min(tokens);

            if best.as_ref().map_or(true, |b| score < b.score) {
                best = Some(FuzzyMatch {
                    key: entry.key.clone(),
                    score,
                });
            }
        }
        best
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

fn sort_tokens(folded: &str) -> String {
    let mut tokens: Vec<&str> = folded.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Static reference data mapping known item names to store categories,
/// plus the fuzzy index over its keys.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    dictionary: HashMap<String, String>,
    index: FuzzyIndex,
}

impl CategoryCatalog {
    /// The catalog shipped with the app, compiled in from
    /// `grocery_catalog.json`.
    pub fn builtin() -> Self {
        let dictionary: HashMap<String, String> = serde_json::from_str(BUILTIN_CATALOG)
            .expect("embedded grocery catalog is valid JSON");
        Self::from_dictionary(dictionary)
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_dictionary(entries.into_iter().collect())
    }

    fn from_dictionary(dictionary: HashMap<String, String>) -> Self {
        let mut keys: Vec<String> = dictionary.keys().cloned().collect();
        // HashMap iteration order is arbitrary; a fixed key order keeps
        // fuzzy tie-breaking deterministic across runs.
        keys.sort_unstable();
        let index = FuzzyIndex::new(keys);
        Self { dictionary, index }
    }

    /// Assign a store category to a free-text item name.
    ///
    /// Exact dictionary keys (case-sensitive, as stored) win outright.
    /// Otherwise the fuzzy index is consulted and its best candidate is
    /// used only when it scores strictly below
    /// [`FUZZY_MATCH_THRESHOLD`]; anything else is [`OTHER_CATEGORY`].
    pub fn resolve(&self, item_name: &str) -> String {
        if let Some(category) = self.dictionary.get(item_name) {
            return category.clone();
        }

        if let Some(m) = self.index.best_match(item_name) {
            if m.score < FUZZY_MATCH_THRESHOLD {
                if let Some(category) = self.dictionary.get(&m.key) {
                    tracing::debug!(
                        item = item_name,
                        matched = %m.key,
                        score = m.score,
                        "fuzzy-matched item to catalog key"
                    );
                    return category.clone();
                }
            }
        }

        OTHER_CATEGORY.to_string()
    }
}
