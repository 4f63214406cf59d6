/*!
 * Tests for application configuration
 */

use lexiscan::app_config::{Config, LogLevel, PhaseSpec};

/// Test that the default configuration is valid
#[test]
fn test_default_config_shouldPassValidation() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

/// Test the stock default values
#[test]
fn test_default_config_shouldCarryExpectedDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "en");
    assert!(!config.use_stopwords);
    assert_eq!(config.min_ngram_count, 5);
    assert_eq!(config.top_k, 20);
    assert_eq!(config.results_dir, "results");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(
        config.phases,
        vec![
            PhaseSpec::new("Early", 1, 3),
            PhaseSpec::new("Middle", 4, 6),
            PhaseSpec::new("Late", 7, 9),
        ]
    );
}

/// Test that the default term set keeps the documented multi-word entries
#[test]
fn test_default_config_shouldKeepMultiWordTerms() {
    let config = Config::default();
    assert!(config.terms.iter().any(|t| t == "church of christ"));
    assert!(config.terms.iter().any(|t| t == "god"));
}

/// Test that a minimal JSON config gets serde defaults applied
#[test]
fn test_config_fromJson_withMissingFields_shouldApplyDefaults() {
    let json = r#"{
        "book1_path": "a.txt",
        "book2_path": "b.txt"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.book1_path, "a.txt");
    assert_eq!(config.language, "en");
    assert_eq!(config.top_k, 20);
    assert!(!config.terms.is_empty());
    assert_eq!(config.phases.len(), 3);
}

/// Test JSON round-trip of a customized configuration
#[test]
fn test_config_serde_withCustomValues_shouldRoundTrip() {
    let mut config = Config::default();
    config.use_stopwords = true;
    config.top_k = 7;
    config.phases = vec![PhaseSpec::new("Whole", 1, 12)];

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert!(restored.use_stopwords);
    assert_eq!(restored.top_k, 7);
    assert_eq!(restored.phases, vec![PhaseSpec::new("Whole", 1, 12)]);
}

/// Test that an invalid language code fails validation
#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.language = "zzz".to_string();
    assert!(config.validate().is_err());
}

/// Test that a zero top_k fails validation
#[test]
fn test_validate_withZeroTopK_shouldFail() {
    let mut config = Config::default();
    config.top_k = 0;
    assert!(config.validate().is_err());
}

/// Test that an empty phase list fails validation
#[test]
fn test_validate_withNoPhases_shouldFail() {
    let mut config = Config::default();
    config.phases.clear();
    assert!(config.validate().is_err());
}

/// Test that a reversed phase range fails validation
#[test]
fn test_validate_withReversedPhaseRange_shouldFail() {
    let mut config = Config::default();
    config.phases = vec![PhaseSpec::new("Backwards", 5, 2)];
    assert!(config.validate().is_err());
}

/// Test that chapters are numbered from 1, so a phase cannot start at 0
#[test]
fn test_validate_withPhaseStartingAtZero_shouldFail() {
    let mut config = Config::default();
    config.phases = vec![PhaseSpec::new("Zero", 0, 3)];
    assert!(config.validate().is_err());
}
