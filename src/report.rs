use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::file_utils::FileManager;

// @module: Report artifacts written to the results directory

/// One term and its occurrence count
#[derive(Debug, Serialize, Clone)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// One named phase and its mean density
#[derive(Debug, Serialize, Clone)]
pub struct PhaseDensity {
    pub phase: String,
    pub density: f64,
}

/// One POS bigram pattern ("ADJ+NOUN") and its count
#[derive(Debug, Serialize, Clone)]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

/// Per-book aggregate written as a JSON table
#[derive(Debug, Serialize, Clone)]
pub struct BookReport {
    /// Book label (file stem)
    pub book: String,

    /// Tagger model the POS patterns came from
    pub tagger_model: String,

    /// Token count after normalization (and stopword filtering, if enabled)
    pub total_tokens: usize,

    /// Number of chapters the segmenter found
    pub chapter_count: usize,

    /// Whole-text term-set density
    pub overall_density: f64,

    /// Term frequencies, descending by count
    pub terms: Vec<TermCount>,

    /// Mean density per narrative phase, in configured order
    pub phases: Vec<PhaseDensity>,

    /// Top POS bigram patterns, descending by count
    pub patterns: Vec<PatternCount>,
}

impl BookReport {
    /// Serialize the report and write it next to the other artifacts.
    ///
    /// Returns the path written, for logging.
    pub fn write<P: AsRef<Path>>(&self, results_dir: P, book_path: &Path) -> Result<PathBuf> {
        let path = FileManager::report_path(results_dir, book_path, "analysis", "json");
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize book report to JSON")?;
        FileManager::write_to_file(&path, &json)?;
        Ok(path)
    }
}

// Chart geometry. Fixed size is fine for a batch artifact.
const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

const SERIES_COLORS: &[&str] = &["#1f77b4", "#d62728"];

/// Render a line chart of phase densities as a standalone SVG document.
///
/// One polyline per book over the shared phase axis. The y-axis runs from
/// zero to the largest density across all series so the two books are
/// directly comparable.
pub fn render_density_chart(title: &str, series: &[(String, Vec<PhaseDensity>)]) -> String {
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let phase_names: Vec<&str> = series
        .first()
        .map(|(_, points)| points.iter().map(|p| p.phase.as_str()).collect())
        .unwrap_or_default();

    let max_density = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p.density))
        .fold(0.0_f64, f64::max)
        .max(1e-9);

    let x_for = |index: usize| {
        let slots = phase_names.len().max(2) - 1;
        MARGIN_LEFT + plot_width * index as f64 / slots as f64
    };
    let y_for = |density: f64| MARGIN_TOP + plot_height * (1.0 - density / max_density);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"16\">{}</text>\n",
        CHART_WIDTH / 2.0,
        escape_xml(title)
    ));

    // Axes
    svg.push_str(&format!(
        "<line x1=\"{l}\" y1=\"{b}\" x2=\"{r}\" y2=\"{b}\" stroke=\"#333\"/>\n",
        l = MARGIN_LEFT,
        r = CHART_WIDTH - MARGIN_RIGHT,
        b = MARGIN_TOP + plot_height
    ));
    svg.push_str(&format!(
        "<line x1=\"{l}\" y1=\"{t}\" x2=\"{l}\" y2=\"{b}\" stroke=\"#333\"/>\n",
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = MARGIN_TOP + plot_height
    ));

    // Horizontal gridlines with y-axis labels
    for step in 0..=4 {
        let value = max_density * step as f64 / 4.0;
        let y = y_for(value);
        svg.push_str(&format!(
            "<line x1=\"{l}\" y1=\"{y:.1}\" x2=\"{r}\" y2=\"{y:.1}\" stroke=\"#ddd\"/>\n",
            l = MARGIN_LEFT,
            r = CHART_WIDTH - MARGIN_RIGHT,
        ));
        svg.push_str(&format!(
            "<text x=\"{x}\" y=\"{y:.1}\" text-anchor=\"end\" font-family=\"sans-serif\" font-size=\"11\" fill=\"#333\">{value:.4}</text>\n",
            x = MARGIN_LEFT - 8.0,
            y = y + 4.0,
        ));
    }

    // Phase labels along the x-axis
    for (index, name) in phase_names.iter().enumerate() {
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\" fill=\"#333\">{label}</text>\n",
            x = x_for(index),
            y = MARGIN_TOP + plot_height + 20.0,
            label = escape_xml(name)
        ));
    }

    // One polyline with point markers per book
    for (series_index, (label, points)) in series.iter().enumerate() {
        let color = SERIES_COLORS[series_index % SERIES_COLORS.len()];
        let path: Vec<String> = points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", x_for(i), y_for(p.density)))
            .collect();
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            path.join(" "),
            color
        ));
        for (i, p) in points.iter().enumerate() {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3.5\" fill=\"{}\"/>\n",
                x_for(i),
                y_for(p.density),
                color
            ));
        }
        // Legend entry
        let legend_y = MARGIN_TOP + 16.0 * series_index as f64;
        svg.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y:.1}\" width=\"12\" height=\"4\" fill=\"{color}\"/>\n",
            x = CHART_WIDTH - MARGIN_RIGHT - 150.0,
            y = legend_y,
        ));
        svg.push_str(&format!(
            "<text x=\"{x}\" y=\"{y:.1}\" font-family=\"sans-serif\" font-size=\"12\" fill=\"#333\">{label}</text>\n",
            x = CHART_WIDTH - MARGIN_RIGHT - 132.0,
            y = legend_y + 6.0,
            label = escape_xml(label)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the phase-density chart to the results directory.
pub fn write_density_chart<P: AsRef<Path>>(
    results_dir: P,
    title: &str,
    series: &[(String, Vec<PhaseDensity>)],
) -> Result<PathBuf> {
    let path = results_dir.as_ref().join("phase_density.svg");
    let svg = render_density_chart(title, series);
    FileManager::write_to_file(&path, &svg)?;
    Ok(path)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
