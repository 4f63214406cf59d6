use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::normalize::tokenize;

// @module: Structural chapter segmentation

/// Ordered mapping from 1-based chapter index to that chapter's tokens.
/// Keys are contiguous integers starting at 1, in document order.
pub type ChapterMap = BTreeMap<usize, Vec<String>>;

// Uppercase only: lowercased occurrences of "chapter ..." in running prose
// must not open a new chapter.
static CHAPTER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CHAPTER\s+[IVXLCDM]+").unwrap());

/// Split a normalized text into raw chapter texts.
///
/// Each chapter's raw text is the marker ("CHAPTER <roman>") concatenated
/// with the body that follows it, trimmed. The preamble before the first
/// marker is discarded. A text without markers yields an empty map, which
/// is a normal outcome, not an error.
pub fn split_into_chapters(text: &str) -> BTreeMap<usize, String> {
    let mut chapters = BTreeMap::new();

    let markers: Vec<_> = CHAPTER_MARKER.find_iter(text).collect();
    for (i, marker) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start());
        let chapter_text = &text[marker.start()..body_end];
        chapters.insert(i + 1, chapter_text.trim().to_string());
    }

    chapters
}

/// Segment a normalized text into a ChapterMap of token sequences.
///
/// The marker itself is structural and is not part of a chapter's token
/// sequence; only the body after it is tokenized.
pub fn segment(text: &str) -> ChapterMap {
    let mut chapters = ChapterMap::new();

    let markers: Vec<_> = CHAPTER_MARKER.find_iter(text).collect();
    for (i, marker) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start());
        let body = &text[marker.end()..body_end];
        chapters.insert(i + 1, tokenize(body.trim()));
    }

    chapters
}
