// Unit tests for monitoring report handling.
//
// Tests isolated pure functions: normalize_name idempotence and edge cases,
// MentionExtractor on realistic report layouts, and the containment matcher's
// symmetry and ordering guarantees.

use coverage_check::monitoring::extract::{extract_mentions, index_by_name, MentionExtractor};
use coverage_check::monitoring::matcher::{find_mention, match_targets, names_match, MatchMode};
use coverage_check::monitoring::normalize::normalize_name;
use coverage_check::monitoring::{parse_targets, MentionRecord};

/// A trimmed-down monitoring mail in the usual table layout.
const REPORT_HTML: &str = r#"
<html><body>
<table width="100%">
  <tr><td style="font-weight:bold">에너지 일반</td></tr>
  <tr><td style="padding-left:20px; font-size:13px">
      <a href="https://www.gasnews.example/news/1" target="_blank">수소 충전소 전국 확대</a>
      <span style="color:#888">(가스신문 2026/01/23 09:12)</span>
  </td></tr>
  <tr><td style="padding-left:20px">
      <a href="https://www.e2news.example/a/2">가스공사, 수소 인프라 투자</a>
      <span>(이투뉴스 (인터넷) 2026/01/23 10:40)</span>
  </td></tr>
  <tr><td style="padding-left:20px">
      <a href="https://sisacast.example/3">수소 경제 전망</a>
      <span>(시사캐스트 2026/01/23 11:05)</span>
  </td></tr>
  <tr><td style="padding-left:20px">
      <a href="https://broken.example/4">No annotation</a>
  </td></tr>
</table>
</body></html>
"#;

// ============================================================
// normalize_name
// ============================================================

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "조선일보",
        "  조선일보 (인터넷)  ",
        "(지면)(온라인) 매일경제",
        "A (b (c) d) e",
        "unbalanced ( open",
        "close ) unbalanced",
        ")(",
        "",
        "   ",
    ];
    for raw in samples {
        let once = normalize_name(raw);
        assert_eq!(normalize_name(&once), once, "normalize not idempotent for {raw:?}");
    }
}

#[test]
fn normalize_removes_all_parentheticals() {
    assert_eq!(normalize_name("(지면)(온라인) 매일경제"), "매일경제");
    assert_eq!(normalize_name("OutletX (web) (mobile)"), "OutletX");
}

#[test]
fn normalize_plain_name_unchanged() {
    assert_eq!(normalize_name("가스신문"), "가스신문");
}

// ============================================================
// MentionExtractor
// ============================================================

#[test]
fn extracts_entries_in_document_order() {
    let mentions = extract_mentions(REPORT_HTML).unwrap();
    let names: Vec<&str> = mentions.iter().map(|m| m.canonical_name.as_str()).collect();
    // The nested "(인터넷)" breaks the annotation pattern, so 이투뉴스 is dropped
    assert_eq!(names, vec!["가스신문", "시사캐스트"]);
    assert_eq!(mentions[0].title, "수소 충전소 전국 확대");
    assert_eq!(mentions[0].url, "https://www.gasnews.example/news/1");
}

#[test]
fn scenario_a_single_entry() {
    let html = r#"<div><a href="https://outletx.example/headline">Headline</a><span>(OutletX 2026/01/23)</span></div>"#;
    let mentions = extract_mentions(html).unwrap();
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].canonical_name, "OutletX");
    assert_eq!(mentions[0].title, "Headline");
}

#[test]
fn no_entries_yields_empty_list() {
    let extractor = MentionExtractor::new().unwrap();
    assert!(extractor.extract("<html><body><p>Nothing here</p></body></html>").is_empty());
    assert!(extractor.extract("not even html").is_empty());
}

#[test]
fn link_without_href_is_ignored() {
    let html = r#"<p><a name="anchor">Headline</a><span>(OutletX 2026/01/23)</span></p>"#;
    assert!(extract_mentions(html).unwrap().is_empty());
}

#[test]
fn syndicated_entries_all_kept_and_index_last_wins() {
    let html = r#"
        <p><a href="/1">First run</a><span>(OutletX 2026/01/23)</span></p>
        <p><a href="/2">Second run</a><span>(OutletX 2026/01/24)</span></p>"#;
    let mentions = extract_mentions(html).unwrap();
    assert_eq!(mentions.len(), 2);
    let index = index_by_name(&mentions);
    assert_eq!(index.len(), 1);
    assert_eq!(index["OutletX"].title, "Second run");
}

// ============================================================
// Matcher
// ============================================================

#[test]
fn containment_is_symmetric() {
    let pairs = [
        ("OutletName", "OutletName.com"),
        ("가스신문", "한국가스신문"),
        ("A", "B"),
        ("Daily", "daily"),
    ];
    for (a, b) in pairs {
        let expected = a.contains(b) || b.contains(a);
        assert_eq!(names_match(a, b), expected, "{a} vs {b}");
        assert_eq!(names_match(b, a), expected, "{b} vs {a}");
    }
}

#[test]
fn short_names_over_match() {
    // Accepted leniency: a one-character target matches any name containing it
    assert!(names_match("뉴", "이투뉴스"));
}

#[test]
fn first_mention_in_iteration_order_is_bound() {
    let mentions = vec![
        MentionRecord::new("한국가스신문", "wide", "/1"),
        MentionRecord::new("가스신문", "exact", "/2"),
    ];
    assert_eq!(find_mention("가스신문", &mentions).unwrap().title, "wide");
}

#[test]
fn match_targets_preserves_order_and_duplicates() {
    let mentions = extract_mentions(REPORT_HTML).unwrap();
    let targets = parse_targets("시사캐스트\n조선일보\n가스신문\n시사캐스트\n");
    let results = match_targets(&targets, &mentions, MatchMode::Containment);
    let flags: Vec<bool> = results.iter().map(|r| r.matched()).collect();
    assert_eq!(flags, vec![true, false, true, true]);
    let order: Vec<&str> = results.iter().map(|r| r.target.as_str()).collect();
    assert_eq!(order, vec!["시사캐스트", "조선일보", "가스신문", "시사캐스트"]);
}
