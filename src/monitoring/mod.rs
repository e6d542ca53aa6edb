// Monitoring report handling: extraction, outlet name normalization, and
// target matching.

pub mod extract;
pub mod matcher;
pub mod normalize;

use serde::{Deserialize, Serialize};

/// One article mention pulled out of a monitoring report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRecord {
    /// Outlet label exactly as captured from the annotation, trimmed
    pub outlet_raw: String,
    /// `outlet_raw` with parenthetical annotations removed
    pub canonical_name: String,
    pub title: String,
    pub url: String,
}

impl MentionRecord {
    /// Build a record, deriving the canonical name from the raw outlet label.
    pub fn new(outlet_raw: &str, title: &str, url: &str) -> Self {
        Self {
            outlet_raw: outlet_raw.to_string(),
            canonical_name: normalize::normalize_name(outlet_raw),
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Parse a block of target outlet names, one per line.
///
/// Lines are trimmed and blank lines are dropped. Order and duplicates are
/// preserved; the report mirrors the operator's list exactly.
pub fn parse_targets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets_drops_blank_lines() {
        let targets = parse_targets("가스신문\n\n  시사캐스트  \n\t\n이투뉴스\n가스신문\n");
        assert_eq!(targets, vec!["가스신문", "시사캐스트", "이투뉴스", "가스신문"]);
    }

    #[test]
    fn test_mention_record_derives_canonical_name() {
        let record = MentionRecord::new("OutletX (web)", "Headline", "https://example.com/a");
        assert_eq!(record.canonical_name, "OutletX");
        assert_eq!(record.outlet_raw, "OutletX (web)");
    }
}
