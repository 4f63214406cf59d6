use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the first book (plain text)
    pub book1_path: String,

    /// Path to the second book (plain text)
    pub book2_path: String,

    /// Language tag for tagger model and stopword list selection (ISO)
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether to remove common function words before analysis
    #[serde(default)]
    pub use_stopwords: bool,

    /// Minimum occurrence count for a POS bigram pattern to be reported
    #[serde(default = "default_min_ngram_count")]
    pub min_ngram_count: usize,

    /// Number of top POS bigram patterns to keep per book
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Directory where report artifacts are written
    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    /// Domain term set scanned for frequency and density
    #[serde(default = "default_terms")]
    pub terms: Vec<String>,

    /// Named narrative phases as contiguous chapter ranges
    #[serde(default = "default_phases")]
    pub phases: Vec<PhaseSpec>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// A named, contiguous range of chapter indices (1-based, inclusive)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PhaseSpec {
    // @field: Phase name shown in reports
    pub name: String,

    // @field: First chapter of the range
    pub first_chapter: usize,

    // @field: Last chapter of the range (inclusive)
    pub last_chapter: usize,
}

impl PhaseSpec {
    // @param name: Phase label
    // @returns: Phase covering the inclusive chapter range
    pub fn new(name: &str, first_chapter: usize, last_chapter: usize) -> Self {
        Self {
            name: name.to_string(),
            first_chapter,
            last_chapter,
        }
    }

    // @returns: The chapter indices in the range
    pub fn chapters(&self) -> std::ops::RangeInclusive<usize> {
        self.first_chapter..=self.last_chapter
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_min_ngram_count() -> usize {
    5
}

fn default_top_k() -> usize {
    20
}

fn default_results_dir() -> String {
    "results".to_string()
}

fn default_phases() -> Vec<PhaseSpec> {
    vec![
        PhaseSpec::new("Early", 1, 3),
        PhaseSpec::new("Middle", 4, 6),
        PhaseSpec::new("Late", 7, 9),
    ]
}

/// Default religious-vocabulary term set.
///
/// The multi-word entries ("church of christ") can never match the
/// single-token membership test and are kept anyway as documented,
/// known behavior.
fn default_terms() -> Vec<String> {
    [
        "excommunication", "church of christ", "conscience", "mercy", "charity",
        "gospel", "mysticism",
        // Core Christian / Orthodox vocabulary
        "god", "lord", "christ", "jesus", "church", "faith", "belief", "religion",
        "saint", "priest", "monk", "elder",
        // Sin, morality, inner struggle
        "sin", "sinful", "sinner", "repent", "repentance", "redemption",
        "salvation", "forgiveness", "guilt", "shame", "humility", "sacrifice",
        // Soul and transcendence
        "soul", "spirit", "spiritual", "heaven", "hell", "damnation", "eternal",
        "immortal",
        // Ritual and religious action
        "prayer", "pray", "confession", "confess", "cross", "blessing", "fasting",
        // Divine authority and punishment
        "divine", "judgment", "justice", "punishment",
        // Suffering and ethics
        "suffering", "atonement", "good", "evil", "miracle", "grace", "providence",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate language
        let _language_name = crate::language_utils::get_language_name(&self.language)?;

        if self.book1_path.trim().is_empty() {
            return Err(anyhow!("book1_path must not be empty"));
        }
        if self.book2_path.trim().is_empty() {
            return Err(anyhow!("book2_path must not be empty"));
        }

        if self.top_k == 0 {
            return Err(anyhow!("top_k must be at least 1"));
        }

        if self.phases.is_empty() {
            return Err(anyhow!("at least one phase must be configured"));
        }
        for phase in &self.phases {
            if phase.first_chapter == 0 {
                return Err(anyhow!(
                    "phase '{}' starts at chapter 0; chapters are numbered from 1",
                    phase.name
                ));
            }
            if phase.last_chapter < phase.first_chapter {
                return Err(anyhow!(
                    "phase '{}' has an empty range: {}..{}",
                    phase.name, phase.first_chapter, phase.last_chapter
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            book1_path: "data/crime-and-punishment.txt".to_string(),
            book2_path: "data/the-brothers-karamazov.txt".to_string(),
            language: default_language(),
            use_stopwords: false,
            min_ngram_count: default_min_ngram_count(),
            top_k: default_top_k(),
            results_dir: default_results_dir(),
            terms: default_terms(),
            phases: default_phases(),
            log_level: LogLevel::default(),
        }
    }
}
