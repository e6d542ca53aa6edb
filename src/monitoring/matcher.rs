// Target-to-mention matching.
//
// The default rule is deliberately loose: two canonical names match when
// either one contains the other. "OutletName" finds "OutletName.com", and
// so does any other name that happens to contain it. Short generic names
// will over-match; that is accepted in exchange for catching decorated
// outlet labels.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::index_by_name;
use super::normalize::normalize_name;
use super::MentionRecord;

/// How target names are compared against mention names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Bidirectional substring containment, first mention found wins
    #[default]
    Containment,
    /// Exact canonical-name equality via the name index (last mention wins)
    Exact,
}

/// The outcome of looking up one target outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Target name as the operator wrote it
    pub target: String,
    /// The mention bound to this target, if any
    pub mention: Option<MentionRecord>,
}

impl MatchResult {
    pub fn matched(&self) -> bool {
        self.mention.is_some()
    }
}

/// True when either canonical name is a substring of the other.
///
/// Comparison is case-sensitive and code-point exact. Empty names never
/// match: an empty string would otherwise be contained in everything.
pub fn names_match(target: &str, mention: &str) -> bool {
    if target.is_empty() || mention.is_empty() {
        return false;
    }
    mention.contains(target) || target.contains(mention)
}

/// First mention, in iteration order, whose canonical name matches `target`.
pub fn find_mention<'a>(target: &str, mentions: &'a [MentionRecord]) -> Option<&'a MentionRecord> {
    mentions
        .iter()
        .find(|mention| names_match(target, &mention.canonical_name))
}

/// Resolve every target against the extracted mentions, preserving target
/// order. Target names are normalized before comparison.
pub fn match_targets(
    targets: &[String],
    mentions: &[MentionRecord],
    mode: MatchMode,
) -> Vec<MatchResult> {
    let index = match mode {
        MatchMode::Exact => Some(index_by_name(mentions)),
        MatchMode::Containment => None,
    };

    targets
        .iter()
        .map(|target| {
            let canonical = normalize_name(target);
            let mention = match &index {
                Some(index) => index.get(canonical.as_str()).copied(),
                None => find_mention(&canonical, mentions),
            };

            debug!(
                target = target.as_str(),
                matched = mention.is_some(),
                outlet = mention.map(|m| m.outlet_raw.as_str()).unwrap_or("-"),
                "Matched target"
            );

            MatchResult {
                target: target.clone(),
                mention: mention.cloned(),
            }
        })
        .collect()
}
