// Coverage check pipeline.
//
// One invocation: validate inputs → extract mentions → match targets →
// (optionally) fetch and score each bound article → build the report.
//
// Everything the run needs arrives in a `CoverageRequest`; nothing is kept
// between runs. Fetches are awaited one at a time in document order.

use std::collections::HashSet;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::monitoring::extract::MentionExtractor;
use crate::monitoring::matcher::{match_targets, MatchMode, MatchResult};
use crate::monitoring::MentionRecord;
use crate::report::builder::build_report;
use crate::report::models::{CoverageReport, ReportWarning};
use crate::similarity::scorer::SimilarityScorer;
use crate::similarity::traits::PageFetcher;
use crate::similarity::SimilarityResult;

/// Inputs for content verification of matched articles.
pub struct SimilarityRequest<'a> {
    /// Press release body the articles are compared against
    pub origin: &'a str,
    /// 0-100; scores at or above it are `Matched`
    pub threshold: f64,
    pub fetcher: &'a dyn PageFetcher,
}

/// All inputs for one coverage check.
pub struct CoverageRequest<'a> {
    /// Target outlet names in report order
    pub targets: &'a [String],
    /// Raw monitoring-report HTML
    pub document: &'a str,
    pub match_mode: MatchMode,
    /// `None` skips similarity scoring entirely
    pub similarity: Option<SimilarityRequest<'a>>,
}

impl CoverageRequest<'_> {
    /// Reject runs that are missing required input. This is the only
    /// failure that aborts a run.
    pub fn validate(&self) -> Result<()> {
        if self.targets.iter().all(|t| t.trim().is_empty()) {
            anyhow::bail!("Target outlet list is empty; enter at least one outlet name");
        }
        if self.document.trim().is_empty() {
            anyhow::bail!("Monitoring report is empty; paste the report's HTML source");
        }
        if let Some(similarity) = &self.similarity {
            if similarity.origin.trim().is_empty() {
                anyhow::bail!("Press release text is empty; it is required for similarity checks");
            }
            if !(0.0..=100.0).contains(&similarity.threshold) {
                anyhow::bail!(
                    "Similarity threshold must be between 0 and 100, got {}",
                    similarity.threshold
                );
            }
        }
        Ok(())
    }
}

/// Run the coverage check and return the finished report.
pub async fn run(request: &CoverageRequest<'_>) -> Result<CoverageReport> {
    request.validate()?;

    let extractor = MentionExtractor::new()?;
    let mentions = extractor.extract(request.document);
    info!(
        mentions = mentions.len(),
        targets = request.targets.len(),
        "Extracted mentions from monitoring report"
    );

    let mut warnings = Vec::new();
    if mentions.is_empty() {
        warn!("No entries found in monitoring report; all targets will be unmatched");
        warnings.push(ReportWarning::ExtractionEmpty);
    }

    let matches = match_targets(request.targets, &mentions, request.match_mode);

    let similarity = match &request.similarity {
        Some(similarity) => Some(score_matches(similarity, &mentions, &matches).await),
        None => None,
    };

    let report = build_report(&matches, similarity.as_deref(), mentions.len(), warnings);

    info!(
        total = report.summary.total_targets,
        matched = report.summary.matched_count,
        percent = report.summary.matched_percent,
        "Coverage check complete"
    );

    Ok(report)
}

/// Score every distinct article bound to a target, in document order.
async fn score_matches(
    request: &SimilarityRequest<'_>,
    mentions: &[MentionRecord],
    matches: &[MatchResult],
) -> Vec<SimilarityResult> {
    let bound_urls: HashSet<&str> = matches
        .iter()
        .filter_map(|m| m.mention.as_ref())
        .map(|mention| mention.url.as_str())
        .collect();

    let mut seen = HashSet::new();
    let to_score: Vec<&MentionRecord> = mentions
        .iter()
        .filter(|mention| bound_urls.contains(mention.url.as_str()))
        .filter(|mention| seen.insert(mention.url.as_str()))
        .collect();

    if to_score.is_empty() {
        return Vec::new();
    }

    println!("Checking {} matched articles...", to_score.len());

    let scorer = SimilarityScorer::new(request.fetcher, request.threshold);
    let pb = ProgressBar::new(to_score.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Articles [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut results = Vec::with_capacity(to_score.len());
    for mention in to_score {
        results.push(scorer.score_mention(request.origin, mention).await);
        pb.inc(1);
    }
    pb.finish_and_clear();

    results
}
