// TF-IDF vectors and cosine similarity over a two-document corpus.
//
// The corpus is just {origin, candidate}. Weighting follows the usual
// smoothed scheme:
//
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf * idf, then each vector is L2-normalized
//
// With only two documents, terms shared by both get idf = 1 and terms unique
// to one side get idf ≈ 1.405, so distinctive vocabulary pulls the score
// down without ever zeroing shared terms.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

/// Sparse term-weight vector.
pub type TermVector = HashMap<String, f64>;

/// Builds TF-IDF vectors for a small corpus.
pub struct TfIdfVectorizer {
    stop_words: HashSet<String>,
    /// Tokens shorter than this (in characters) are ignored
    pub min_token_chars: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            stop_words: get(LANGUAGE::English).into_iter().collect(),
            min_token_chars: 2,
        }
    }
}

impl TfIdfVectorizer {
    /// Lowercase, split on anything that is not alphanumeric, and drop short
    /// tokens and English stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= self.min_token_chars)
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    /// One L2-normalized TF-IDF vector per document, in input order.
    pub fn fit_transform(&self, documents: &[&str]) -> Vec<TermVector> {
        let n = documents.len() as f64;
        let counts: Vec<HashMap<String, f64>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for token in self.tokenize(doc) {
                    *tf.entry(token).or_insert(0.0) += 1.0;
                }
                tf
            })
            .collect();

        let mut df: HashMap<&str, f64> = HashMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *df.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
        }

        counts
            .iter()
            .map(|tf| {
                let mut vector: TermVector = tf
                    .iter()
                    .map(|(term, count)| {
                        let doc_freq = df.get(term.as_str()).copied().unwrap_or(0.0);
                        let idf = ((1.0 + n) / (1.0 + doc_freq)).ln() + 1.0;
                        (term.clone(), count * idf)
                    })
                    .collect();
                l2_normalize(&mut vector);
                vector
            })
            .collect()
    }

    /// Similarity of `candidate` to `origin` on a 0-100 scale, rounded to one
    /// decimal place.
    pub fn similarity(&self, origin: &str, candidate: &str) -> f64 {
        let vectors = self.fit_transform(&[origin, candidate]);
        let cosine = cosine_similarity(&vectors[0], &vectors[1]);
        round_one_decimal((cosine * 100.0).clamp(0.0, 100.0))
    }
}

/// Cosine similarity of two sparse vectors. Zero when either is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|other| w * other))
        .sum();
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn l2_normalize(vector: &mut TermVector) {
    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in vector.values_mut() {
            *w /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        let v = TfIdfVectorizer::default();
        let tokens = v.tokenize("The hydrogen turbine, a 수소 충전소!");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(tokens.iter().all(|t| t.chars().count() >= 2));
        for expected in ["hydrogen", "turbine", "수소", "충전소"] {
            assert!(tokens.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_identical_documents_score_100() {
        let v = TfIdfVectorizer::default();
        let text = "Korea Gas Corporation expands hydrogen charging stations nationwide";
        assert_eq!(v.similarity(text, text), 100.0);
    }

    #[test]
    fn test_disjoint_documents_score_0() {
        let v = TfIdfVectorizer::default();
        assert_eq!(v.similarity("hydrogen charging stations", "football league results"), 0.0);
    }

    #[test]
    fn test_shared_terms_get_lower_idf() {
        let v = TfIdfVectorizer::default();
        let vectors = v.fit_transform(&["hydrogen turbine", "hydrogen pipeline"]);
        // Shared "hydrogen" weighs less than the unique term in each doc
        assert!(vectors[0]["hydrogen"] < vectors[0]["turbine"]);
        let norm: f64 = vectors[0].values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_empty_vector() {
        let empty = TermVector::new();
        let mut other = TermVector::new();
        other.insert("a".to_string(), 1.0);
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
    }
}
