// Mention extraction from monitoring-report HTML.
//
// Monitoring mails list each clipped article as a link followed by an
// annotation like "(가스신문 2026/01/23 10:15)". Two layouts show up in
// practice:
//
//   1. An indented table cell (`padding-left:20px`) holding the link and a
//      `<span>` annotation somewhere inside it.
//   2. A bare link whose next sibling element is the annotation.
//
// Both layouts are accepted. Every link is tried against its adjacent
// annotation first; the container rule only covers cells whose annotation
// is not the link's direct sibling, once per container. Links are tracked
// by node so an entry is never emitted twice.

use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Result};
use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::MentionRecord;

/// Inline style fragment that flags an entry container (whitespace removed,
/// lowercase).
pub const INDENT_MARKER: &str = "padding-left:20px";

/// "(" + outlet name + whitespace + four-digit year.
const ANNOTATION_PATTERN: &str = r"\(([^()]+?)\s+\d{4}";

/// Extracts [`MentionRecord`]s from monitoring-report markup.
pub struct MentionExtractor {
    annotation: Regex,
    links: Selector,
    spans: Selector,
}

impl MentionExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            annotation: Regex::new(ANNOTATION_PATTERN)
                .map_err(|e| anyhow!("Invalid annotation pattern: {e}"))?,
            links: parse_selector("a[href]")?,
            spans: parse_selector("span")?,
        })
    }

    /// Parse `html` and return every recognizable mention in document order.
    ///
    /// An empty result means nothing matched either layout; it is not an
    /// error here. The pipeline reports it as a warning.
    pub fn extract(&self, html: &str) -> Vec<MentionRecord> {
        let document = Html::parse_document(html);
        let mut seen_links = HashSet::new();
        let mut used_containers = HashSet::new();
        let mut mentions = Vec::new();

        for link in document.select(&self.links) {
            if seen_links.contains(&link.id()) {
                continue;
            }

            let sibling_entry = annotation_sibling(link)
                .and_then(|annotation| self.mention_from(link, annotation));

            let mention = match sibling_entry {
                Some(mention) => {
                    seen_links.insert(link.id());
                    Some(mention)
                }
                None => {
                    let Some(container) = indented_container(link) else {
                        continue;
                    };
                    if !used_containers.insert(container.id()) {
                        continue;
                    }
                    let first_link = container.select(&self.links).next();
                    let first_span = container.select(&self.spans).next();
                    match (first_link, first_span) {
                        (Some(first), Some(span)) if seen_links.insert(first.id()) => {
                            self.mention_from(first, span)
                        }
                        _ => None,
                    }
                }
            };

            if let Some(mention) = mention {
                mentions.push(mention);
            }
        }

        debug!(mentions = mentions.len(), "Extracted mentions from report");
        mentions
    }

    /// Pull the outlet label out of an annotation string, if it has one.
    pub fn outlet_from_annotation(&self, annotation: &str) -> Option<String> {
        let caps = self.annotation.captures(annotation)?;
        let outlet = caps.get(1)?.as_str().trim();
        (!outlet.is_empty()).then(|| outlet.to_string())
    }

    fn mention_from(
        &self,
        link: ElementRef<'_>,
        annotation: ElementRef<'_>,
    ) -> Option<MentionRecord> {
        let annotation_text = element_text(annotation);
        let Some(outlet_raw) = self.outlet_from_annotation(&annotation_text) else {
            debug!(annotation = %annotation_text, "Annotation has no outlet/year, skipping");
            return None;
        };
        let url = link.value().attr("href").unwrap_or_default().trim();
        Some(MentionRecord::new(&outlet_raw, &element_text(link), url))
    }
}

/// Convenience wrapper: build an extractor and run it once.
pub fn extract_mentions(html: &str) -> Result<Vec<MentionRecord>> {
    Ok(MentionExtractor::new()?.extract(html))
}

/// Index mentions by canonical name. Later mentions overwrite earlier ones,
/// so the last occurrence in document order wins.
pub fn index_by_name(mentions: &[MentionRecord]) -> HashMap<&str, &MentionRecord> {
    let mut index = HashMap::new();
    for mention in mentions {
        index.insert(mention.canonical_name.as_str(), mention);
    }
    index
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {css:?}: {e:?}"))
}

fn is_indented(element: &ElementRef<'_>) -> bool {
    element.value().attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        compact.contains(INDENT_MARKER)
    })
}

/// Nearest ancestor carrying the indentation marker.
fn indented_container(link: ElementRef<'_>) -> Option<ElementRef<'_>> {
    link.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| is_indented(element))
}

/// The element immediately after `link`, skipping whitespace-only text.
fn annotation_sibling(link: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for sibling in link.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            return (element.value().name() != "a").then_some(element);
        }
        if let Some(text) = sibling.value().as_text() {
            if !text.trim().is_empty() {
                return None;
            }
        }
    }
    None
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MentionExtractor {
        MentionExtractor::new().unwrap()
    }

    #[test]
    fn test_indented_cell_layout() {
        let html = r#"<table><tr>
            <td style="font-size:12px; padding-left: 20px;">
                <a href="https://gasnews.example/1">수소 충전소 확대</a>
                <span>(가스신문 2026/01/23 10:15)</span>
            </td></tr></table>"#;
        let mentions = extractor().extract(html);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].outlet_raw, "가스신문");
        assert_eq!(mentions[0].title, "수소 충전소 확대");
        assert_eq!(mentions[0].url, "https://gasnews.example/1");
    }

    #[test]
    fn test_sibling_layout() {
        let html = r#"<div><a href="/a">Headline</a> <span>(OutletX 2026/01/23)</span></div>"#;
        let mentions = extractor().extract(html);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].canonical_name, "OutletX");
        assert_eq!(mentions[0].title, "Headline");
    }

    #[test]
    fn test_sibling_must_be_adjacent() {
        let html = r#"<p><a href="/a">Headline</a> by staff <span>(OutletX 2026/01/23)</span></p>"#;
        assert!(extractor().extract(html).is_empty());
    }

    #[test]
    fn test_annotation_without_year_discarded() {
        let html = r#"<p><a href="/a">Headline</a><span>(OutletX, yesterday)</span></p>"#;
        assert!(extractor().extract(html).is_empty());
    }

    #[test]
    fn test_both_layouts_emit_once() {
        let html = r#"<table><tr><td style="padding-left:20px">
            <a href="/a">One</a><span>(A 2026)</span></td></tr></table>"#;
        assert_eq!(extractor().extract(html).len(), 1);
    }

    #[test]
    fn test_indented_wrapper_with_several_entries() {
        let html = r#"<div style="padding-left:20px">
            <p><a href="/a">First</a><span>(OutletA 2026/01/23)</span></p>
            <p><a href="/b">Second</a><span>(OutletB 2026/01/23)</span></p>
            <p><a href="/c">Third</a><span>(OutletC 2026/01/23)</span></p>
        </div>"#;
        let mentions = extractor().extract(html);
        let names: Vec<&str> = mentions.iter().map(|m| m.canonical_name.as_str()).collect();
        assert_eq!(names, vec!["OutletA", "OutletB", "OutletC"]);
    }

    #[test]
    fn test_container_rule_when_annotation_not_adjacent() {
        let html = r#"<table><tr><td style="padding-left:20px">
            <a href="/a">Headline</a><br><span>(OutletA 2026/01/23)</span>
        </td></tr></table>"#;
        let mentions = extractor().extract(html);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].title, "Headline");
        assert_eq!(mentions[0].canonical_name, "OutletA");
    }

    #[test]
    fn test_outlet_from_annotation() {
        let ex = extractor();
        assert_eq!(
            ex.outlet_from_annotation("(매일경제 (인터넷) 2025-12-01)"),
            None,
            "nested parens break the non-paren capture"
        );
        assert_eq!(
            ex.outlet_from_annotation("  (이투뉴스   2026.01.02)"),
            Some("이투뉴스".to_string())
        );
        assert_eq!(ex.outlet_from_annotation("(   2026)"), None);
    }

    #[test]
    fn test_index_last_wins() {
        let mentions = vec![
            MentionRecord::new("A", "first", "/1"),
            MentionRecord::new("A", "second", "/2"),
        ];
        let index = index_by_name(&mentions);
        assert_eq!(index["A"].title, "second");
    }
}
