use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::corpus;
use crate::corpus::chapters::ChapterMap;
use crate::corpus::patterns::pos_bigram_frequencies;
use crate::corpus::phases::phase_density;
use crate::corpus::stopwords::StopwordFilter;
use crate::corpus::terms::TermSet;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::report::{self, BookReport, PatternCount, PhaseDensity, TermCount};
use crate::taggers::lexicon::LexiconTagger;
use crate::taggers::{TaggedToken, Tagger};

// @module: Application controller for corpus analysis

// Tokens per tagging call; only drives progress reporting granularity.
const TAGGING_CHUNK: usize = 4096;

/// Main application controller for the two-book analysis run
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Injected POS tagger
    tagger: Box<dyn Tagger>,
}

impl Controller {
    // @method: Create a controller with the built-in tagger for the configured language
    pub fn with_config(config: Config) -> Result<Self> {
        let language = language_utils::normalize_to_part1(&config.language)?;
        let tagger = LexiconTagger::new(&language)
            .context("No built-in tagger for the configured language")?;
        Ok(Self {
            config,
            tagger: Box::new(tagger),
        })
    }

    /// Create a controller with an externally supplied tagger
    pub fn with_tagger(config: Config, tagger: Box<dyn Tagger>) -> Self {
        Self { config, tagger }
    }

    /// Run the whole batch pipeline over both configured books.
    ///
    /// Each book flows forward through strip, normalize, segment, term
    /// analysis, phase aggregation and POS pattern analysis; reports and
    /// the phase-density chart land in the results directory.
    pub fn run(&self) -> Result<()> {
        let start_time = std::time::Instant::now();

        FileManager::ensure_dir(&self.config.results_dir)?;

        let stopwords = if self.config.use_stopwords {
            let language = language_utils::normalize_to_part1(&self.config.language)?;
            let filter = StopwordFilter::for_language(&language);
            debug!("Stopword filtering enabled ({} words)", filter.len());
            filter
        } else {
            StopwordFilter::empty()
        };

        let terms = corpus::term_set(&self.config.terms);
        info!(
            "Analyzing {} and {} ({} terms, tagger {})",
            self.config.book1_path,
            self.config.book2_path,
            terms.len(),
            self.tagger.model_name()
        );

        let mut chart_series = Vec::new();
        for book_path in [&self.config.book1_path, &self.config.book2_path] {
            let report = self.analyze_book(Path::new(book_path), &terms, &stopwords)?;
            if !report.phases.is_empty() {
                chart_series.push((report.book.clone(), report.phases.clone()));
            }
            let report_path = report.write(&self.config.results_dir, Path::new(book_path))?;
            info!("Report written: {:?}", report_path);
        }

        if chart_series.is_empty() {
            warn!("No phase densities computed; skipping chart");
        } else {
            let chart_path = report::write_density_chart(
                &self.config.results_dir,
                "Term-Set Density by Narrative Phase",
                &chart_series,
            )?;
            info!("Chart written: {:?}", chart_path);
        }

        info!("Analysis finished in {:.1}s", start_time.elapsed().as_secs_f64());
        Ok(())
    }

    /// Analyze a single book into its report.
    fn analyze_book(
        &self,
        book_path: &Path,
        terms: &TermSet,
        stopwords: &StopwordFilter,
    ) -> Result<BookReport> {
        let book = book_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| book_path.display().to_string());

        let raw = FileManager::read_to_string_lossy(book_path)?;
        let stripped = corpus::strip_gutenberg(&raw);
        let normalized = corpus::normalize(stripped);

        let mut tokens = corpus::tokenize(&normalized);
        stopwords.retain_content_words(&mut tokens);

        let mut chapters = corpus::segment(&normalized);
        for chapter_tokens in chapters.values_mut() {
            stopwords.retain_content_words(chapter_tokens);
        }
        debug!("{}: {} tokens, {} chapters", book, tokens.len(), chapters.len());

        let term_counts = self.ranked_term_counts(&tokens, terms);
        let overall_density = corpus::density(&tokens, terms);

        let phases = self.phase_densities(&book, &chapters, terms)?;

        let tagged = self.tag_with_progress(&book, &tokens)?;
        let patterns = pos_bigram_frequencies(&tagged, self.config.min_ngram_count, self.config.top_k)
            .into_iter()
            .map(|((first, second), count)| PatternCount {
                pattern: format!("{}+{}", first, second),
                count,
            })
            .collect();

        Ok(BookReport {
            book,
            tagger_model: self.tagger.model_name().to_string(),
            total_tokens: tokens.len(),
            chapter_count: chapters.len(),
            overall_density,
            terms: term_counts,
            phases,
            patterns,
        })
    }

    /// Term frequencies sorted by descending count, ties alphabetical.
    fn ranked_term_counts(&self, tokens: &[String], terms: &TermSet) -> Vec<TermCount> {
        let mut counts: Vec<TermCount> = corpus::count_terms(tokens, terms)
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.term.cmp(&b.term)));
        counts
    }

    /// Mean density per configured phase.
    ///
    /// A book without chapter markers yields an empty map; that is a normal
    /// outcome and phase analysis is skipped for it. A populated map that
    /// is missing a requested chapter index is a configuration bug and
    /// fails the run.
    fn phase_densities(
        &self,
        book: &str,
        chapters: &ChapterMap,
        terms: &TermSet,
    ) -> Result<Vec<PhaseDensity>> {
        if chapters.is_empty() {
            warn!("{}: no chapter markers found, skipping phase analysis", book);
            return Ok(Vec::new());
        }

        let mut densities = Vec::new();
        for phase in &self.config.phases {
            let density = phase_density(chapters, phase, terms)
                .with_context(|| format!("Phase analysis failed for {}", book))?;
            densities.push(PhaseDensity {
                phase: phase.name.clone(),
                density,
            });
        }
        Ok(densities)
    }

    /// POS-tag the token sequence with a progress bar over chunks.
    fn tag_with_progress(&self, book: &str, tokens: &[String]) -> Result<Vec<TaggedToken>> {
        let chunk_count = tokens.len().div_ceil(TAGGING_CHUNK).max(1);
        let progress = ProgressBar::new(chunk_count as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message(format!("Tagging {}", book));

        let mut tagged = Vec::with_capacity(tokens.len());
        for chunk in tokens.chunks(TAGGING_CHUNK) {
            tagged.extend(self.tagger.tag(chunk)?);
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(tagged)
    }
}
