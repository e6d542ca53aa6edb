// Content similarity verification: fetch a candidate article and compare
// it lexically against the original press release.

pub mod body;
pub mod fetch;
pub mod scorer;
pub mod tfidf;
pub mod traits;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::monitoring::MentionRecord;

/// Candidate text at or below this many characters is not scored.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Default similarity threshold (0-100) for a `Matched` verdict.
pub const DEFAULT_THRESHOLD: f64 = 30.0;

/// Verdict for one candidate article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Score at or above the threshold
    Matched,
    /// Score below the threshold
    Unclear,
    /// Article body too short to compare
    InsufficientContent,
    /// The article could not be retrieved or decoded
    FetchError,
}

impl Classification {
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            Classification::Matched
        } else {
            Classification::Unclear
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Matched => "Matched",
            Classification::Unclear => "Unclear",
            Classification::InsufficientContent => "Insufficient content",
            Classification::FetchError => "Fetch error",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Similarity outcome for a single mention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub mention: MentionRecord,
    /// Cosine similarity scaled to 0-100, one decimal place
    pub score: f64,
    pub classification: Classification,
    /// Failure message for `FetchError` results
    pub detail: Option<String>,
}
