// Colored terminal output for coverage reports and mention lists.

use colored::Colorize;

use crate::monitoring::MentionRecord;
use crate::report::models::{CoverageReport, CoverageRow, PLACEHOLDER};
use crate::similarity::{Classification, SimilarityResult};

/// Display the per-outlet coverage table and summary.
pub fn display_report(report: &CoverageReport) {
    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }

    println!(
        "\n{}",
        format!("=== Coverage Report ({} outlets) ===", report.rows.len()).bold()
    );
    println!();

    if report.similarity_checked {
        println!(
            "  {:<20} {:<10}  {:>6}  {:<20}  {}",
            "Outlet".dimmed(),
            "Status".dimmed(),
            "Score".dimmed(),
            "Verdict".dimmed(),
            "Title".dimmed(),
        );
    } else {
        println!(
            "  {:<20} {:<10}  {}",
            "Outlet".dimmed(),
            "Status".dimmed(),
            "Title".dimmed(),
        );
    }
    println!("  {}", "-".repeat(78).dimmed());

    for row in &report.rows {
        display_row(row, report.similarity_checked);
    }

    println!();
    let summary = &report.summary;
    println!(
        "  {} of {} outlets published ({:.1}%)",
        summary.matched_count.to_string().bold(),
        summary.total_targets,
        summary.matched_percent,
    );
    println!(
        "  {}",
        format!("{} mentions found in the monitoring report", report.mentions_found).dimmed()
    );
}

fn display_row(row: &CoverageRow, with_similarity: bool) {
    let status = if row.matched {
        row.status_label().green()
    } else {
        row.status_label().red()
    };
    let title = super::truncate_chars(row.title.as_deref().unwrap_or(PLACEHOLDER), 60);

    if with_similarity {
        let score = row
            .score
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let verdict = match row.classification {
            Some(c) => colorize_classification(c),
            None => PLACEHOLDER.dimmed(),
        };
        println!(
            "  {:<20} {:<10}  {:>6}  {:<20}  {}",
            row.outlet, status, score, verdict, title
        );
        if let Some(detail) = &row.detail {
            println!("      {}", super::truncate_chars(detail, 100).dimmed());
        }
    } else {
        println!("  {:<20} {:<10}  {}", row.outlet, status, title);
    }
}

/// Display the mentions extracted from a monitoring report.
pub fn display_mentions(mentions: &[MentionRecord]) {
    if mentions.is_empty() {
        println!("No article entries found in the monitoring report.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Extracted Mentions ({}) ===", mentions.len()).bold()
    );
    println!();

    for (i, mention) in mentions.iter().enumerate() {
        println!(
            "  {:>3}. {:<20} {}",
            i + 1,
            mention.canonical_name.bold(),
            super::truncate_chars(&mention.title, 60)
        );
        println!("       {}", mention.url.dimmed());
    }
}

/// Display a single similarity check.
pub fn display_similarity(result: &SimilarityResult) {
    println!("\n{}", format!("=== Similarity for {} ===", result.mention.url).bold());
    println!("  Score: {:.1}/100", result.score);
    println!("  Verdict: {}", colorize_classification(result.classification));
    if let Some(detail) = &result.detail {
        println!("  Detail: {}", detail.dimmed());
    }
}

fn colorize_classification(classification: Classification) -> colored::ColoredString {
    let label = classification.label();
    match classification {
        Classification::Matched => label.green(),
        Classification::Unclear => label.yellow(),
        Classification::InsufficientContent => label.dimmed(),
        Classification::FetchError => label.red(),
    }
}
