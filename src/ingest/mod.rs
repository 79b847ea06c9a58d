// src/ingest/mod.rs
//! Text acquisition and batch orchestration around the scoring engine:
//! article list → fetch + extract → text files → scored records.

pub mod config;
pub mod extract;
pub mod providers;
pub mod store;
pub mod types;

use crate::engine::{ResultRecord, Scorer};
use crate::ingest::store::ArticleStore;
use crate::ingest::types::{ArticleProvider, ArticleRef};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use tracing::{info, warn};

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("documents_scored_total", "Documents scored by the engine.");
        describe_histogram!("score_duration_ms", "Scoring time per document in milliseconds.");
        describe_counter!("pages_fetched_total", "Article pages downloaded.");
        describe_counter!(
            "articles_fetched_total",
            "Articles extracted and stored as text files."
        );
        describe_counter!(
            "articles_skipped_total",
            "Articles skipped (no content div or no stored text)."
        );
        describe_counter!("fetch_errors_total", "Article fetch/extract errors.");
        describe_histogram!("fetch_duration_ms", "Page download time in milliseconds.");
    });
}

static RE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(p|div|br|li|ul|ol|h[1-6]|tr|table|blockquote|section|article)\b[^>]*>")
        .expect("block tag regex")
});
static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("tag regex"));
static RE_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{00A0}]+").expect("ws regex"));

/// HTML fragment → plain text. Block-level tags become line breaks, inline
/// tags vanish, entities are decoded, blank lines dropped.
pub fn html_to_text(html: &str) -> String {
    let with_breaks = RE_BLOCK.replace_all(html, "\n");
    let stripped = RE_TAGS.replace_all(&with_breaks, "");
    let decoded = html_escape::decode_html_entities(&stripped).to_string();

    decoded
        .lines()
        .map(|l| RE_BLANKS.replace_all(l, " ").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch every article and store it as text. Failures are logged and
/// skipped; returns how many articles were stored.
pub async fn fetch_all(
    provider: &dyn ArticleProvider,
    articles: &[ArticleRef],
    store: &ArticleStore,
) -> usize {
    ensure_metrics_described();

    let mut stored = 0usize;
    for a in articles {
        match provider.fetch(a).await {
            Ok(Some(article)) => match store.save(&a.id, &article) {
                Ok(_) => {
                    stored += 1;
                    counter!("articles_fetched_total").increment(1);
                }
                Err(e) => {
                    warn!(error = ?e, id = %a.id, "could not store article");
                    counter!("fetch_errors_total").increment(1);
                }
            },
            Ok(None) => {
                warn!(id = %a.id, url = %a.url, "no article content found");
                counter!("articles_skipped_total").increment(1);
            }
            Err(e) => {
                warn!(error = ?e, id = %a.id, provider = provider.name(), "fetch failed");
                counter!("fetch_errors_total").increment(1);
            }
        }
    }

    info!(
        target: "ingest",
        requested = articles.len(),
        stored,
        "fetch finished"
    );
    stored
}

/// Score every stored article, in input order. Articles without a text file
/// are skipped.
pub fn analyze_all(
    scorer: &Scorer,
    articles: &[ArticleRef],
    store: &ArticleStore,
) -> anyhow::Result<Vec<ResultRecord>> {
    ensure_metrics_described();

    let mut out = Vec::with_capacity(articles.len());
    for a in articles {
        let Some(text) = store.load(&a.id)? else {
            counter!("articles_skipped_total").increment(1);
            continue;
        };
        out.push(scorer.score_with_ids(&text, Some(a.id.clone()), Some(a.url.clone())));
    }

    info!(
        target: "ingest",
        requested = articles.len(),
        scored = out.len(),
        "analysis finished"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_to_text_breaks_blocks_and_decodes() {
        let s = "<p>Hello&nbsp;<b>world</b>.</p><p>Second&amp;last</p>";
        assert_eq!(html_to_text(s), "Hello world.\nSecond&last");
    }

    #[test]
    fn html_to_text_drops_blank_lines() {
        let s = "<div>\n\n  <br/>  A\t\tB </div>";
        assert_eq!(html_to_text(s), "A B");
    }

    #[test]
    fn empty_is_ok() {
        assert_eq!(html_to_text(""), "");
    }
}
