use rustc_hash::FxHashMap;

use crate::corpus::stopwords::StopwordFilter;
use crate::taggers::{PosTag, TaggedToken};

// @module: POS bigram pattern frequencies

/// An ordered pair of POS tags carried by two adjacent tokens.
pub type BigramPattern = (PosTag, PosTag);

/// Count POS bigram patterns over a tagged token sequence.
///
/// Every pair of consecutive tags (tag[i], tag[i+1]) is counted. Patterns
/// below `min_count` are discarded, the rest are sorted by descending count
/// with ties broken by first-seen order, and the result is truncated to
/// `top_k` entries.
pub fn pos_bigram_frequencies(
    tagged: &[TaggedToken],
    min_count: usize,
    top_k: usize,
) -> Vec<(BigramPattern, usize)> {
    // (count, first-seen position) per pattern; the position drives
    // deterministic tie ordering.
    let mut counts: FxHashMap<BigramPattern, (usize, usize)> = FxHashMap::default();

    for (position, pair) in tagged.windows(2).enumerate() {
        let pattern = (pair[0].tag, pair[1].tag);
        let entry = counts.entry(pattern).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(BigramPattern, (usize, usize))> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count >= min_count)
        .collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    ranked.truncate(top_k);

    ranked
        .into_iter()
        .map(|(pattern, (count, _))| (pattern, count))
        .collect()
}

/// Remove stopword tokens before pairing.
///
/// Removal changes adjacency: the surviving neighbors of an excluded token
/// become adjacent to each other, they are not separated by a gap.
pub fn remove_stopwords(tagged: Vec<TaggedToken>, filter: &StopwordFilter) -> Vec<TaggedToken> {
    tagged
        .into_iter()
        .filter(|t| !filter.is_stopword(&t.token))
        .collect()
}
