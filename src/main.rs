// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod corpus;
mod errors;
mod file_utils;
mod language_utils;
mod report;
mod taggers;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze two books and write reports (default command)
    Analyze(AnalyzeArgs),

    /// Generate shell completions for lexiscan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// First book to analyze (plain text)
    #[arg(value_name = "BOOK1")]
    book1: Option<PathBuf>,

    /// Second book to analyze (plain text)
    #[arg(value_name = "BOOK2")]
    book2: Option<PathBuf>,

    /// Language code for tagger and stopword selection (e.g., 'en')
    #[arg(short, long)]
    language: Option<String>,

    /// Remove common function words before analysis
    #[arg(short = 's', long)]
    use_stopwords: bool,

    /// Minimum occurrence count for a POS bigram pattern
    #[arg(short, long)]
    min_ngram_count: Option<usize>,

    /// Number of top POS bigram patterns to report
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Directory for report artifacts
    #[arg(short, long)]
    results_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lexiscan - lexical and syntactic analysis of literary texts
///
/// Normalizes two plain-text books, segments them into chapters, and
/// aggregates domain-term densities and POS bigram patterns across
/// narrative phases.
#[derive(Parser, Debug)]
#[command(name = "lexiscan")]
#[command(author = "lexiscan Team")]
#[command(version = "1.0.0")]
#[command(about = "Corpus analysis for long-form literary texts")]
#[command(long_about = "lexiscan compares lexical and syntactic patterns between two books.

EXAMPLES:
    lexiscan book1.txt book2.txt                # Analyze using default config
    lexiscan -s book1.txt book2.txt             # Filter stopwords first
    lexiscan -k 30 -m 3 book1.txt book2.txt     # Widen the POS pattern report
    lexiscan -r out/ book1.txt book2.txt        # Write reports to out/
    lexiscan --log-level debug book1.txt book2.txt
    lexiscan completions bash > lexiscan.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically. Term sets and
    narrative phases are configured there.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// First book to analyze (plain text)
    #[arg(value_name = "BOOK1")]
    book1: Option<PathBuf>,

    /// Second book to analyze (plain text)
    #[arg(value_name = "BOOK2")]
    book2: Option<PathBuf>,

    /// Language code for tagger and stopword selection (e.g., 'en')
    #[arg(short, long)]
    language: Option<String>,

    /// Remove common function words before analysis
    #[arg(short = 's', long)]
    use_stopwords: bool,

    /// Minimum occurrence count for a POS bigram pattern
    #[arg(short, long)]
    min_ngram_count: Option<usize>,

    /// Number of top POS bigram patterns to report
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Directory for report artifacts
    #[arg(short, long)]
    results_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lexiscan", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let analyze_args = AnalyzeArgs {
                book1: cli.book1,
                book2: cli.book2,
                language: cli.language,
                use_stopwords: cli.use_stopwords,
                min_ngram_count: cli.min_ngram_count,
                top_k: cli.top_k,
                results_dir: cli.results_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_analyze(analyze_args)
        }
    }
}

fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(book1) = &options.book1 {
        config.book1_path = book1.to_string_lossy().to_string();
    }
    if let Some(book2) = &options.book2 {
        config.book2_path = book2.to_string_lossy().to_string();
    }
    if let Some(language) = &options.language {
        config.language = language.clone();
    }
    if options.use_stopwords {
        config.use_stopwords = true;
    }
    if let Some(min_ngram_count) = options.min_ngram_count {
        config.min_ngram_count = min_ngram_count;
    }
    if let Some(top_k) = options.top_k {
        config.top_k = top_k;
    }
    if let Some(results_dir) = &options.results_dir {
        config.results_dir = results_dir.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create and run the controller
    let controller = Controller::with_config(config)?;
    controller.run()
}
