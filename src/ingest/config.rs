// src/ingest/config.rs
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::ingest::types::ArticleRef;

/// Load the article list from an explicit path. Supports TOML or JSON formats.
///
/// TOML:
/// ```toml
/// [[articles]]
/// id = "blackassign0001"
/// url = "https://example.com/a"
/// ```
/// JSON: `[{"URL_ID": "blackassign0001", "URL": "https://example.com/a"}]`
pub fn load_articles_from(path: &Path) -> Result<Vec<ArticleRef>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading article list from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_articles(&content, ext.as_str())
}

fn parse_articles(s: &str, hint_ext: &str) -> Result<Vec<ArticleRef>> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("[[articles]]");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported article list format"))
}

fn parse_toml(s: &str) -> Result<Vec<ArticleRef>> {
    #[derive(serde::Deserialize)]
    struct TomlList {
        articles: Vec<ArticleRef>,
    }
    let v: TomlList = toml::from_str(s)?;
    Ok(clean_list(v.articles))
}

fn parse_json(s: &str) -> Result<Vec<ArticleRef>> {
    let v: Vec<ArticleRef> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

/// Ids become file names under the articles directory.
fn is_safe_id(id: &str) -> bool {
    !id.contains(['/', '\\']) && !id.contains("..")
}

/// Trim, drop empty or path-like ids, dedup by id keeping the first
/// occurrence (order kept).
fn clean_list(items: Vec<ArticleRef>) -> Vec<ArticleRef> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        let id = it.id.trim().to_string();
        if id.is_empty() {
            continue;
        }
        if !is_safe_id(&id) {
            warn!(%id, url = %it.url, "skipping article with path-like id");
            continue;
        }
        if !seen.insert(id.clone()) {
            continue;
        }
        out.push(ArticleRef {
            id,
            url: it.url.trim().to_string(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_and_json_lists_are_cleaned() {
        let toml = r#"
[[articles]]
id = " a1 "
url = "https://x/1"

[[articles]]
id = ""
url = "https://x/skip"

[[articles]]
id = "a1"
url = "https://x/dup"

[[articles]]
id = "a2"
url = "https://x/2"
"#;
        let v = parse_toml(toml).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].id, "a1");
        assert_eq!(v[0].url, "https://x/1");
        assert_eq!(v[1].id, "a2");

        let json = r#"[{"URL_ID":"b1","URL":" https://y/1 "},{"id":"b2","url":"https://y/2"}]"#;
        let j = parse_json(json).unwrap();
        assert_eq!(j.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["b1", "b2"]);
        assert_eq!(j[0].url, "https://y/1");
    }

    #[test]
    fn path_like_ids_are_dropped() {
        let json = r#"[
            {"id":"../escape","url":"https://x/1"},
            {"id":"nested/a","url":"https://x/2"},
            {"id":"win\\a","url":"https://x/3"},
            {"id":"ok.v2","url":"https://x/4"}
        ]"#;
        let v = parse_json(json).unwrap();
        assert_eq!(v.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["ok.v2"]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_articles("not a list", "txt").is_err());
    }
}
