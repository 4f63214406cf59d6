/*!
 * Error types for the lexiscan application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with POS taggers
#[derive(Error, Debug)]
pub enum TaggerError {
    /// Error when the requested tagger model is not available
    #[error("Tagger model not available: {0}")]
    ModelNotAvailable(String),

    /// Error when a language has no tagger implementation
    #[error("No tagger for language: {0}")]
    UnsupportedLanguage(String),

    /// Error produced while tagging a token sequence
    #[error("Tagging failed: {0}")]
    TaggingFailed(String),
}

/// Errors that can occur during corpus analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A configured phase references a chapter the segmenter never produced.
    /// This is a configuration bug in the caller, not a recoverable condition.
    #[error("phase '{phase}' references chapter {chapter}, which is not in the chapter map")]
    MissingChapter {
        /// Name of the phase whose range is invalid
        phase: String,
        /// The chapter index that was not found
        chapter: usize,
    },

    /// Error from the POS tagger
    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a tagger
    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),

    /// Error from corpus analysis
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
