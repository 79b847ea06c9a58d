// src/ingest/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One row of the input list. Both fields are passed through to the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRef {
    #[serde(alias = "URL_ID", alias = "url_id")]
    pub id: String,
    #[serde(alias = "URL", default)]
    pub url: String,
}

/// Extracted article content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

#[async_trait::async_trait]
pub trait ArticleProvider: Send + Sync {
    /// `Ok(None)`: page fetched but no article body found.
    async fn fetch(&self, article: &ArticleRef) -> Result<Option<Article>>;
    fn name(&self) -> &'static str;
}
