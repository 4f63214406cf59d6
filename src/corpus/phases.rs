use crate::app_config::PhaseSpec;
use crate::corpus::chapters::ChapterMap;
use crate::corpus::terms::{density, TermSet};
use crate::errors::AnalysisError;

// @module: Density aggregation over narrative phases

/// Mean term-set density over a phase's chapter range.
///
/// The density is computed independently per chapter and the unweighted
/// arithmetic mean is returned, so every chapter counts equally regardless
/// of length. This is deliberately NOT the pooled density of the
/// concatenated chapters.
///
/// A chapter index in the range that is absent from the map is a hard
/// error: supplying valid, populated ranges is the caller's contract, and
/// missing chapters are not defaulted to zero.
pub fn phase_density(
    chapters: &ChapterMap,
    phase: &PhaseSpec,
    terms: &TermSet,
) -> Result<f64, AnalysisError> {
    let mut densities = Vec::new();

    for index in phase.chapters() {
        let tokens = chapters
            .get(&index)
            .ok_or_else(|| AnalysisError::MissingChapter {
                phase: phase.name.clone(),
                chapter: index,
            })?;
        densities.push(density(tokens, terms));
    }

    if densities.is_empty() {
        return Ok(0.0);
    }
    Ok(densities.iter().sum::<f64>() / densities.len() as f64)
}
