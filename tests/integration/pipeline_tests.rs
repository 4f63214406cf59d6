/*!
 * End-to-end pipeline tests over synthetic Gutenberg-style fixtures
 */

use anyhow::Result;
use lexiscan::app_config::{Config, PhaseSpec};
use lexiscan::taggers::mock::MockTagger;
use lexiscan::Controller;
use crate::common;

fn fixture_config(dir: &std::path::Path) -> Result<Config> {
    let dir_buf = dir.to_path_buf();
    let book1 = common::create_test_book(&dir_buf, "book-one.txt")?;
    let book2 = common::create_test_book(&dir_buf, "book-two.txt")?;

    let mut config = Config::default();
    config.book1_path = book1.to_string_lossy().to_string();
    config.book2_path = book2.to_string_lossy().to_string();
    config.results_dir = dir.join("results").to_string_lossy().to_string();
    config.min_ngram_count = 1;
    config.terms = vec!["god".to_string(), "sin".to_string(), "mercy".to_string()];
    Ok(config)
}

/// Test a full run with the built-in tagger over two nine-chapter books
#[test]
fn test_run_withNineChapterBooks_shouldWriteAllArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = fixture_config(temp_dir.path())?;
    let results_dir = std::path::PathBuf::from(&config.results_dir);

    let controller = Controller::with_config(config)?;
    controller.run()?;

    let report1 = results_dir.join("book-one.analysis.json");
    let report2 = results_dir.join("book-two.analysis.json");
    let chart = results_dir.join("phase_density.svg");
    assert!(report1.exists());
    assert!(report2.exists());
    assert!(chart.exists());

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report1)?)?;
    assert_eq!(parsed["chapter_count"], 9);
    assert_eq!(parsed["phases"].as_array().unwrap().len(), 3);
    // "god" appears in chapter one of the fixture
    let terms = parsed["terms"].as_array().unwrap();
    assert!(terms.iter().any(|t| t["term"] == "god"));
    // Boilerplate outside the markers never reaches the analysis
    assert!(terms.iter().all(|t| t["term"] != "license"));

    Ok(())
}

/// Test that an injected tagger drives the reported patterns
#[test]
fn test_run_withInjectedMockTagger_shouldUseItsModelName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = fixture_config(temp_dir.path())?;
    let results_dir = std::path::PathBuf::from(&config.results_dir);

    let controller = Controller::with_tagger(config, Box::new(MockTagger::working()));
    controller.run()?;

    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        results_dir.join("book-one.analysis.json"),
    )?)?;
    assert_eq!(parsed["tagger_model"], "mock");
    // Every token is NOUN under the working mock, so only one pattern survives
    let patterns = parsed["patterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0]["pattern"], "NOUN+NOUN");

    Ok(())
}

/// Test that a missing book file fails the run
#[test]
fn test_run_withMissingBookFile_shouldReturnError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = fixture_config(temp_dir.path())?;
    config.book1_path = temp_dir.path().join("absent.txt").to_string_lossy().to_string();

    let controller = Controller::with_config(config)?;
    assert!(controller.run().is_err());

    Ok(())
}

/// Test that phases referencing chapters beyond the book fail the run
#[test]
fn test_run_withPhasesBeyondChapterCount_shouldReturnError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = fixture_config(temp_dir.path())?;
    config.phases = vec![PhaseSpec::new("TooFar", 1, 40)];

    let controller = Controller::with_config(config)?;
    assert!(controller.run().is_err());

    Ok(())
}

/// Test that books without chapter markers skip phase analysis silently
#[test]
fn test_run_withUnstructuredBooks_shouldSkipPhasesButStillReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_buf = temp_dir.path().to_path_buf();
    let book1 = common::create_test_file(&dir_buf, "flat-one.txt", "god and man walked on")?;
    let book2 = common::create_test_file(&dir_buf, "flat-two.txt", "no structure in here either")?;

    let mut config = Config::default();
    config.book1_path = book1.to_string_lossy().to_string();
    config.book2_path = book2.to_string_lossy().to_string();
    config.results_dir = temp_dir.path().join("results").to_string_lossy().to_string();
    config.min_ngram_count = 1;
    config.terms = vec!["god".to_string()];

    let controller = Controller::with_config(config)?;
    controller.run()?;

    let results_dir = temp_dir.path().join("results");
    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        results_dir.join("flat-one.analysis.json"),
    )?)?;
    assert_eq!(parsed["chapter_count"], 0);
    assert!(parsed["phases"].as_array().unwrap().is_empty());
    // No phase densities anywhere means no chart is drawn
    assert!(!results_dir.join("phase_density.svg").exists());

    Ok(())
}

/// Test that stopword filtering shrinks the analyzed token count
#[test]
fn test_run_withStopwordsEnabled_shouldReduceTokenCount() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_plain = fixture_config(temp_dir.path())?;

    let plain_dir = temp_dir.path().join("plain");
    let filtered_dir = temp_dir.path().join("filtered");

    let mut config = config_plain.clone();
    config.results_dir = plain_dir.to_string_lossy().to_string();
    Controller::with_config(config)?.run()?;

    let mut config = config_plain;
    config.use_stopwords = true;
    config.results_dir = filtered_dir.to_string_lossy().to_string();
    Controller::with_config(config)?.run()?;

    let read_tokens = |dir: &std::path::Path| -> Result<u64> {
        let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
            dir.join("book-one.analysis.json"),
        )?)?;
        Ok(parsed["total_tokens"].as_u64().unwrap())
    };

    assert!(read_tokens(&filtered_dir)? < read_tokens(&plain_dir)?);

    Ok(())
}
