/*!
 * Tests for language code utilities
 */

use lexiscan::language_utils::{get_language_name, language_codes_match, normalize_to_part1};

/// Test that a valid 2-letter code resolves to a language name
#[test]
fn test_get_language_name_withValidPart1Code_shouldReturnName() {
    let name = get_language_name("en").unwrap();
    assert_eq!(name, "English");
}

/// Test that a valid 3-letter code resolves to a language name
#[test]
fn test_get_language_name_withValidPart3Code_shouldReturnName() {
    let name = get_language_name("rus").unwrap();
    assert_eq!(name, "Russian");
}

/// Test that an invalid code is rejected
#[test]
fn test_get_language_name_withInvalidCode_shouldReturnError() {
    assert!(get_language_name("zz").is_err());
    assert!(get_language_name("not-a-code").is_err());
}

/// Test 3-letter to 2-letter normalization
#[test]
fn test_normalize_to_part1_withPart3Code_shouldReturnPart1() {
    assert_eq!(normalize_to_part1("eng").unwrap(), "en");
    assert_eq!(normalize_to_part1("rus").unwrap(), "ru");
}

/// Test that a 2-letter code passes through with whitespace and case folded
#[test]
fn test_normalize_to_part1_withUntrimmedPart1Code_shouldNormalize() {
    assert_eq!(normalize_to_part1(" EN ").unwrap(), "en");
}

/// Test language code matching across code lengths
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldReturnTrue() {
    assert!(language_codes_match("en", "eng"));
    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("en", "bogus"));
}
