use once_cell::sync::Lazy;
use regex::Regex;

// @module: Text normalization and tokenization

// A hyphen at a line end, with optional trailing whitespace before the
// newline, marks a word broken across lines by the typesetter.
static HYPHEN_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\s*\n").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Unicode-aware word pattern: word code points with optional internal
// hyphens or apostrophes. Digits and standalone punctuation never match.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\W\d_]+(?:[-'][^\W\d_]+)*").unwrap());

/// Normalize a stripped text for downstream segmentation.
///
/// Re-joins words broken across line ends and collapses every whitespace
/// run to a single space. Case is NOT folded here: structural markers such
/// as "CHAPTER" stay matchable upstream of tokenization, which is where
/// lowercasing happens.
pub fn normalize(text: &str) -> String {
    let repaired = HYPHEN_BREAK.replace_all(text, "");
    WHITESPACE_RUN.replace_all(&repaired, " ").into_owned()
}

/// Tokenize a text into lowercase word tokens.
///
/// Hyphenated and contracted words ("well-read", "don't") stay single
/// tokens; digits and punctuation are excluded entirely.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
