// Report data models.
//
// Rows stay typed (Option for "no value") all the way to the output layer,
// which decides how placeholders look.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::similarity::Classification;

/// Shown wherever a row has no value for a column.
pub const PLACEHOLDER: &str = "-";

/// One row per target outlet, in the operator's order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRow {
    /// Target name as entered
    pub outlet: String,
    pub matched: bool,
    /// Raw outlet label of the bound mention
    pub mention_outlet: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Present only when similarity scoring ran for this row's mention
    pub score: Option<f64>,
    pub classification: Option<Classification>,
    /// Fetch failure message, if scoring failed
    pub detail: Option<String>,
}

impl CoverageRow {
    pub fn status_label(&self) -> &'static str {
        if self.matched {
            "Published"
        } else {
            "Not found"
        }
    }
}

/// Aggregate counts over all rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total_targets: usize,
    pub matched_count: usize,
    /// Percentage of targets matched, one decimal place; 0 with no targets
    pub matched_percent: f64,
}

impl CoverageSummary {
    pub fn from_counts(total_targets: usize, matched_count: usize) -> Self {
        let matched_percent = if total_targets == 0 {
            0.0
        } else {
            let raw = matched_count as f64 / total_targets as f64 * 100.0;
            (raw * 10.0).round() / 10.0
        };
        Self {
            total_targets,
            matched_count,
            matched_percent,
        }
    }
}

/// Non-fatal conditions raised during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportWarning {
    /// The monitoring document contained no recognizable entries
    ExtractionEmpty,
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportWarning::ExtractionEmpty => f.write_str(
                "No article entries were found in the monitoring report. \
                 Check that the full HTML source was provided.",
            ),
        }
    }
}

/// The full result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub rows: Vec<CoverageRow>,
    pub summary: CoverageSummary,
    /// Number of mentions extracted from the monitoring document
    pub mentions_found: usize,
    /// Whether similarity scoring was requested for this run
    pub similarity_checked: bool,
    pub warnings: Vec<ReportWarning>,
    pub generated_at: DateTime<Utc>,
}

/// Which derived value a [`DerivedColumn`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Status,
    Title,
    Url,
    Score,
    Verdict,
}

impl ColumnKind {
    pub fn header(&self) -> &'static str {
        match self {
            ColumnKind::Status => "Status",
            ColumnKind::Title => "Title",
            ColumnKind::Url => "URL",
            ColumnKind::Score => "Similarity",
            ColumnKind::Verdict => "Verdict",
        }
    }

    /// The cell text for `row`, with [`PLACEHOLDER`] for missing values.
    pub fn cell(&self, row: &CoverageRow) -> String {
        let value = match self {
            ColumnKind::Status => Some(row.status_label().to_string()),
            ColumnKind::Title => row.title.clone(),
            ColumnKind::Url => row.url.clone(),
            ColumnKind::Score => row.score.map(|s| format!("{s:.1}")),
            ColumnKind::Verdict => row.classification.map(|c| c.label().to_string()),
        };
        value.unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// A single column of derived values, one per row, ready to be placed into
/// an external grid by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedColumn {
    pub header: String,
    pub values: Vec<String>,
}

impl CoverageReport {
    /// Project the report onto one column.
    pub fn derived_column(&self, kind: ColumnKind) -> DerivedColumn {
        DerivedColumn {
            header: kind.header().to_string(),
            values: self.rows.iter().map(|row| kind.cell(row)).collect(),
        }
    }
}
