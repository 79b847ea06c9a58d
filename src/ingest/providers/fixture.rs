// src/ingest/providers/fixture.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;

use crate::ingest::extract::extract_article;
use crate::ingest::types::{Article, ArticleProvider, ArticleRef};

/// Serves canned HTML pages keyed by URL (tests and offline runs).
/// Unknown URLs behave like a failed fetch.
pub struct FixtureProvider {
    pages: HashMap<String, String>,
    content_class: String,
}

impl FixtureProvider {
    pub fn new(content_class: &str) -> Self {
        Self {
            pages: HashMap::new(),
            content_class: content_class.to_string(),
        }
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

#[async_trait]
impl ArticleProvider for FixtureProvider {
    async fn fetch(&self, article: &ArticleRef) -> Result<Option<Article>> {
        let html = self
            .pages
            .get(&article.url)
            .ok_or_else(|| anyhow!("no fixture for {}", article.url))?;
        Ok(extract_article(html, &self.content_class))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
