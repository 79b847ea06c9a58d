//! Article extraction from raw HTML: page title plus the text of the first
//! `<div>` carrying the content class (nested divs included).
//!
//! Regex/tag-scan based; enough for the blog templates this targets, not a
//! general HTML parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ingest::html_to_text;
use crate::ingest::types::Article;

static RE_DROP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(header|footer|script|style)\b[^>]*>.*?</(?:header|footer|script|style)\s*>")
        .expect("drop regex")
});
static RE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("title regex"));
static RE_DIV_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<div\b[^>]*\bclass\s*=\s*["']([^"']*)["'][^>]*>"#).expect("div regex")
});
static RE_DIV_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(/?)div\b[^>]*>").expect("div tag regex"));

/// Returns `None` when the page has no matching content div.
pub fn extract_article(html: &str, content_class: &str) -> Option<Article> {
    let cleaned = RE_DROP.replace_all(html, "");

    let title = RE_TITLE
        .captures(&cleaned)
        .and_then(|c| c.get(1))
        .map(|m| html_to_text(m.as_str()))
        .unwrap_or_default();

    let body_html = find_content_div(&cleaned, content_class)?;
    Some(Article {
        title,
        body: html_to_text(body_html),
    })
}

/// Inner HTML of the first `<div class="... content_class ...">`.
fn find_content_div<'a>(html: &'a str, content_class: &str) -> Option<&'a str> {
    let wanted: Vec<&str> = content_class.split_whitespace().collect();
    if wanted.is_empty() {
        return None;
    }

    let open = RE_DIV_OPEN.captures_iter(html).find(|c| {
        let classes: Vec<&str> = c[1].split_whitespace().collect();
        wanted.iter().all(|w| classes.contains(w))
    })?;
    let start = open.get(0)?.end();

    let mut depth = 1usize;
    for tag in RE_DIV_TAG.captures_iter(&html[start..]) {
        let m = tag.get(0)?;
        if &tag[1] == "/" {
            depth -= 1;
            if depth == 0 {
                return Some(&html[start..start + m.start()]);
            }
        } else {
            depth += 1;
        }
    }
    // unclosed div: take the rest of the document
    Some(&html[start..])
}
