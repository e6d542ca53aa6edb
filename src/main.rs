use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use coverage_check::config::Config;
use coverage_check::monitoring::matcher::MatchMode;
use coverage_check::monitoring::{self, MentionRecord};
use coverage_check::pipeline::coverage::{self, CoverageRequest, SimilarityRequest};
use coverage_check::similarity::fetch::HttpFetcher;
use coverage_check::similarity::scorer::SimilarityScorer;

/// Coverage Check: verify that a press release was published.
///
/// Compares your target outlet list against a media monitoring report and,
/// optionally, checks each published article against the original release.
#[derive(Parser)]
#[command(name = "coverage-check", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check which target outlets published the release
    Check {
        /// Text file with one target outlet name per line
        #[arg(long)]
        targets: PathBuf,

        /// HTML source of the monitoring report
        #[arg(long)]
        report: PathBuf,

        /// Press release text; enables similarity checks of matched articles
        #[arg(long)]
        origin: Option<PathBuf>,

        /// Similarity threshold 0-100 (default: COVERAGE_SIMILARITY_THRESHOLD or 30)
        #[arg(long)]
        threshold: Option<f64>,

        /// Require exact outlet names instead of substring matching
        #[arg(long)]
        exact: bool,

        /// Write the report as CSV (UTF-8 with BOM) to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the article mentions found in a monitoring report
    Extract {
        /// HTML source of the monitoring report
        #[arg(long)]
        report: PathBuf,
    },

    /// Score a single article URL against the press release
    Score {
        /// Article URL to fetch
        url: String,

        /// Press release text file
        #[arg(long)]
        origin: PathBuf,

        /// Similarity threshold 0-100 (default: COVERAGE_SIMILARITY_THRESHOLD or 30)
        #[arg(long)]
        threshold: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coverage_check=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            targets,
            report,
            origin,
            threshold,
            exact,
            csv,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(threshold) = threshold {
                config.similarity_threshold = threshold;
            }
            if exact {
                config.match_mode = MatchMode::Exact;
            }

            let target_list = monitoring::parse_targets(&read_input(&targets)?);
            let document = read_input(&report)?;
            let origin_text = origin.as_deref().map(read_input).transpose()?;

            let fetcher = HttpFetcher::new(config.fetch_timeout, &config.user_agent)?;
            let request = CoverageRequest {
                targets: &target_list,
                document: &document,
                match_mode: config.match_mode,
                similarity: origin_text.as_deref().map(|origin| SimilarityRequest {
                    origin,
                    threshold: config.similarity_threshold,
                    fetcher: &fetcher,
                }),
            };

            println!("Checking {} target outlets...", target_list.len());
            let coverage_report = coverage::run(&request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&coverage_report)?);
            } else {
                coverage_check::output::terminal::display_report(&coverage_report);
            }

            if let Some(path) = csv {
                coverage_check::output::export::export_csv(&coverage_report, &path)?;
                info!(path = %path.display(), "Wrote CSV export");
                println!("\n{} {}", "Report saved to".bold(), path.display());
            }
        }

        Commands::Extract { report } => {
            let document = read_input(&report)?;
            let mentions: Vec<MentionRecord> =
                monitoring::extract::extract_mentions(&document)?;
            coverage_check::output::terminal::display_mentions(&mentions);
        }

        Commands::Score {
            url,
            origin,
            threshold,
        } => {
            let mut config = Config::load()?;
            if let Some(threshold) = threshold {
                config.similarity_threshold = threshold;
            }
            config.require_valid_threshold()?;

            let origin_text = read_input(&origin)?;
            if origin_text.trim().is_empty() {
                anyhow::bail!("Press release file {} is empty", origin.display());
            }

            let fetcher = HttpFetcher::new(config.fetch_timeout, &config.user_agent)?;
            let scorer = SimilarityScorer::new(&fetcher, config.similarity_threshold);
            let mention = MentionRecord::new("", "", &url);

            println!("Scoring {url}...");
            let result = scorer.score_mention(&origin_text, &mention).await;
            coverage_check::output::terminal::display_similarity(&result);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
