use rustc_hash::{FxHashMap, FxHashSet};

// @module: Term-set frequency and density

/// Set of lowercase terms, fixed for the run.
pub type TermSet = FxHashSet<String>;

/// Mapping from term to occurrence count. Only terms with count > 0 are
/// present; callers must not assume every configured term appears as a key.
pub type FrequencyReport = FxHashMap<String, usize>;

/// Build a TermSet from configured terms, lowercasing each entry.
///
/// Multi-word entries are admitted but can never match the single-token
/// membership test used by `count_terms` and `density`. That is documented,
/// known behavior, kept rather than silently fixed.
pub fn term_set(terms: &[String]) -> TermSet {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

/// Count occurrences of each term of `terms` in `tokens`.
///
/// Tokens are lowercased before lookup. Terms that never occur are omitted
/// from the result entirely.
pub fn count_terms(tokens: &[String], terms: &TermSet) -> FrequencyReport {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    for token in &lowered {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    terms
        .iter()
        .filter_map(|term| {
            counts
                .get(term.as_str())
                .map(|&count| (term.clone(), count))
        })
        .collect()
}

/// Fraction of tokens belonging to the term set, in [0, 1].
///
/// An empty token sequence has density 0 by definition; this is an explicit
/// edge-case policy, not a division-by-zero guard bolted on.
pub fn density(tokens: &[String], terms: &TermSet) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let matches = tokens
        .iter()
        .filter(|t| terms.contains(t.to_lowercase().as_str()))
        .count();
    matches as f64 / tokens.len() as f64
}
