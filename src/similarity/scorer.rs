// Per-mention similarity scoring.
//
// Every failure is folded into the result's classification. A dead link or
// a paywalled stub affects only its own row; the batch keeps going.

use tracing::{debug, warn};

use super::body::extract_main_text;
use super::tfidf::TfIdfVectorizer;
use super::traits::PageFetcher;
use super::{Classification, SimilarityResult, MIN_CONTENT_CHARS};
use crate::monitoring::MentionRecord;

/// Scores candidate articles against one origin text.
pub struct SimilarityScorer<'a> {
    fetcher: &'a dyn PageFetcher,
    vectorizer: TfIdfVectorizer,
    /// Scores at or above this (0-100) are classified `Matched`
    pub threshold: f64,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, threshold: f64) -> Self {
        Self {
            fetcher,
            vectorizer: TfIdfVectorizer::default(),
            threshold,
        }
    }

    /// Fetch the mention's article and score it against `origin`.
    pub async fn score_mention(&self, origin: &str, mention: &MentionRecord) -> SimilarityResult {
        let (score, classification, detail) = match self.fetcher.fetch_text(&mention.url).await {
            Ok(html) => {
                // The response buffer is dropped once the text is pulled out
                let text = extract_main_text(&html);
                let (score, classification) = self.score_text(origin, &text);
                (score, classification, None)
            }
            Err(e) => {
                warn!(url = mention.url.as_str(), error = %e, "Failed to fetch candidate article");
                (0.0, Classification::FetchError, Some(format!("{e:#}")))
            }
        };

        debug!(
            outlet = mention.canonical_name.as_str(),
            score = score,
            classification = %classification,
            "Scored mention"
        );

        SimilarityResult {
            mention: mention.clone(),
            score,
            classification,
            detail,
        }
    }

    /// Score already-extracted candidate text. Text of
    /// [`MIN_CONTENT_CHARS`] characters or fewer is never compared.
    pub fn score_text(&self, origin: &str, candidate: &str) -> (f64, Classification) {
        if candidate.chars().count() <= MIN_CONTENT_CHARS {
            return (0.0, Classification::InsufficientContent);
        }
        let score = self.vectorizer.similarity(origin, candidate);
        (score, Classification::from_score(score, self.threshold))
    }
}
