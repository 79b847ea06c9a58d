// src/ingest/providers/http.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use std::time::Duration;

use crate::config::FetchConfig;
use crate::ingest::extract::extract_article;
use crate::ingest::types::{Article, ArticleProvider, ArticleRef};

/// Fetches article pages over HTTP and extracts the content div.
pub struct HttpArticleProvider {
    client: reqwest::Client,
    content_class: String,
}

impl HttpArticleProvider {
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(cfg.user_agent.clone())
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            content_class: cfg.content_class.clone(),
        })
    }
}

#[async_trait]
impl ArticleProvider for HttpArticleProvider {
    async fn fetch(&self, article: &ArticleRef) -> Result<Option<Article>> {
        let t0 = std::time::Instant::now();

        let html = self
            .client
            .get(&article.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("fetching {}", article.url))?
            .text()
            .await
            .with_context(|| format!("reading body of {}", article.url))?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("fetch_duration_ms").record(ms);
        counter!("pages_fetched_total").increment(1);

        Ok(extract_article(&html, &self.content_class))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
