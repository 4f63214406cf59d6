use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The configuration carries a `language` tag that selects the tagger model
/// and the stopword list. This module validates and normalizes that tag
/// using ISO 639-1 (2-letter) and ISO 639-3 (3-letter) codes.
/// Validate a language code and return its English name
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    let language = if normalized_code.len() == 2 {
        Language::from_639_1(&normalized_code)
    } else if normalized_code.len() == 3 {
        Language::from_639_3(&normalized_code)
    } else {
        None
    };

    language
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
///
/// Stopword lists and tagger models are keyed by 2-letter codes, so a
/// 3-letter config value is folded down when a 2-letter equivalent exists.
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    } else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            if let Some(part1) = lang.to_639_1() {
                return Ok(part1.to_string());
            }
            // No 2-letter equivalent exists, keep the 3-letter code
            return Ok(normalized_code);
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check whether two language codes refer to the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part1(code1), normalize_to_part1(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
