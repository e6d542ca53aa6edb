// Report assembly from match and similarity results.

use std::collections::HashMap;

use chrono::Utc;

use super::models::{CoverageReport, CoverageRow, CoverageSummary, ReportWarning};
use crate::monitoring::matcher::MatchResult;
use crate::similarity::SimilarityResult;

/// Build the report rows and summary.
///
/// `matches` must already be in target order; one row is emitted per entry.
/// `similarity` is `None` when scoring was not requested; otherwise results
/// are looked up by the bound mention's URL. `mentions_found` and `warnings`
/// come from the extraction stage and are carried onto the report as is.
pub fn build_report(
    matches: &[MatchResult],
    similarity: Option<&[SimilarityResult]>,
    mentions_found: usize,
    warnings: Vec<ReportWarning>,
) -> CoverageReport {
    let by_url: Option<HashMap<&str, &SimilarityResult>> = similarity.map(|results| {
        results
            .iter()
            .map(|result| (result.mention.url.as_str(), result))
            .collect()
    });

    let rows: Vec<CoverageRow> = matches
        .iter()
        .map(|result| {
            let mention = result.mention.as_ref();
            let scored = match (&by_url, mention) {
                (Some(by_url), Some(mention)) => by_url.get(mention.url.as_str()).copied(),
                _ => None,
            };

            CoverageRow {
                outlet: result.target.clone(),
                matched: result.matched(),
                mention_outlet: mention.map(|m| m.outlet_raw.clone()),
                title: mention.map(|m| m.title.clone()),
                url: mention.map(|m| m.url.clone()),
                score: scored.map(|s| s.score),
                classification: scored.map(|s| s.classification),
                detail: scored.and_then(|s| s.detail.clone()),
            }
        })
        .collect();

    let matched_count = rows.iter().filter(|row| row.matched).count();

    CoverageReport {
        summary: CoverageSummary::from_counts(rows.len(), matched_count),
        rows,
        mentions_found,
        similarity_checked: similarity.is_some(),
        warnings,
        generated_at: Utc::now(),
    }
}
