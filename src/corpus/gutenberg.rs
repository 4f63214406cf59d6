use once_cell::sync::Lazy;
use regex::Regex;

// @module: Project Gutenberg boilerplate stripping

// Start markers in preference order: modern header first, then older variants.
static START_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\*\s*START OF (THIS|THE) PROJECT GUTENBERG EBOOK",
        r"(?i)START OF (THIS|THE) PROJECT GUTENBERG EBOOK",
        r"(?i)End of the Project Gutenberg(?:'s)? Etext",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// End markers, searched only after the matched start marker.
static END_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\*\s*END OF (THIS|THE) PROJECT GUTENBERG EBOOK",
        r"(?i)END OF (THIS|THE) PROJECT GUTENBERG EBOOK",
        r"(?i)End of Project Gutenberg(?:'s)? (?:Etext|eBook)",
        r"(?i)END:\s*FULL LICENSE",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Strip Project Gutenberg front/back matter from a raw text.
///
/// Returns the substring strictly between the first start marker and the
/// first end marker found after it. Stripping is best-effort: with no start
/// marker the input is returned unchanged, and with no end marker everything
/// after the start marker is returned. Absent markers are never an error.
pub fn strip_gutenberg(text: &str) -> &str {
    let start = START_MARKERS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.end());

    let Some(start) = start else {
        return text;
    };

    let tail = &text[start..];
    let end = END_MARKERS.iter().find_map(|re| re.find(tail)).map(|m| m.start());

    match end {
        Some(end) => &tail[..end],
        None => tail,
    }
}
