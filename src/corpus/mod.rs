/*!
 * Corpus analysis pipeline for long-form literary texts.
 *
 * This module contains the core text-processing stages. Data flows strictly
 * forward through them:
 *
 * - `gutenberg`: boilerplate stripping via start/end marker search
 * - `normalize`: hyphenation repair, whitespace collapse, word tokenization
 * - `chapters`: structural segmentation into an ordered chapter map
 * - `terms`: term-set frequency counts and density
 * - `phases`: density aggregation over named chapter ranges
 * - `patterns`: POS bigram pattern frequencies
 * - `stopwords`: language-keyed function-word filtering
 */

// Re-export main types for easier usage
pub use self::chapters::{segment, split_into_chapters, ChapterMap};
pub use self::gutenberg::strip_gutenberg;
pub use self::normalize::{normalize, tokenize};
pub use self::patterns::pos_bigram_frequencies;
pub use self::phases::phase_density;
pub use self::stopwords::StopwordFilter;
pub use self::terms::{count_terms, density, term_set, FrequencyReport, TermSet};

// Submodules
pub mod chapters;
pub mod gutenberg;
pub mod normalize;
pub mod patterns;
pub mod phases;
pub mod stopwords;
pub mod terms;
