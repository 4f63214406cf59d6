/*!
 * Tests for term-set frequency and density
 */

use lexiscan::corpus::{count_terms, density, term_set};

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Test that density of an empty sequence is zero for any term set
#[test]
fn test_density_withEmptyTokens_shouldReturnZero() {
    let terms = term_set(&["god".to_string(), "soul".to_string()]);
    assert_eq!(density(&[], &terms), 0.0);
}

/// Test the documented density fraction
#[test]
fn test_density_withTwoOfThreeMatches_shouldReturnTwoThirds() {
    let terms = term_set(&["god".to_string()]);
    let toks = tokens(&["god", "man", "god"]);

    let d = density(&toks, &terms);

    assert!((d - 2.0 / 3.0).abs() < 1e-12);
}

/// Test that counting is case-normalized on the token side
#[test]
fn test_density_withMixedCaseTokens_shouldStillMatch() {
    let terms = term_set(&["god".to_string()]);
    let toks = tokens(&["God", "GOD"]);

    assert_eq!(density(&toks, &terms), 1.0);
}

/// Test that zero-count terms are omitted and counts are exact
#[test]
fn test_count_terms_withSomeAbsentTerms_shouldOmitZeroCounts() {
    let terms = term_set(&["god".to_string(), "soul".to_string(), "mercy".to_string()]);
    let toks = tokens(&["god", "man", "god", "mercy"]);

    let report = count_terms(&toks, &terms);

    assert_eq!(report.get("god"), Some(&2));
    assert_eq!(report.get("mercy"), Some(&1));
    assert!(!report.contains_key("soul"));
    assert!(report.values().all(|&count| count > 0));
}

/// Test that a multi-word term never matches the single-token membership test
#[test]
fn test_count_terms_withMultiWordTerm_shouldNeverMatch() {
    let terms = term_set(&["church of christ".to_string(), "church".to_string()]);
    let toks = tokens(&["church", "of", "christ"]);

    let report = count_terms(&toks, &terms);

    assert_eq!(report.get("church"), Some(&1));
    assert!(!report.contains_key("church of christ"));
    assert_eq!(density(&toks, &terms), 1.0 / 3.0);
}
