// Main-text extraction from article HTML.
//
// Article pages carry navigation, ads and related-story lists around the
// actual story. We try the semantic <article> element first, then the
// content containers the common Korean news CMSes use, then <body>.

use scraper::{ElementRef, Html, Selector};

/// Containers tried in priority order. The first one that yields any text
/// is used.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "#article-view-content-div",
    "#articleBody",
    "#articleBodyContents",
    "#newsct_article",
    "#dic_area",
    ".article_body",
    ".news_body",
    "#content",
    "body",
];

/// Elements whose text never counts as article content.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract the readable body text of an article page as a single
/// whitespace-compacted string.
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for css in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = visible_text(element);
            if !text.is_empty() {
                return text;
            }
        }
    }

    visible_text(document.root_element())
}

/// Text content of `element`, skipping script-like elements, with runs of
/// whitespace collapsed to a single space.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !SKIPPED_ELEMENTS.contains(&child_element.value().name()) {
                push_text(child_element, out);
            }
        }
    }
}
