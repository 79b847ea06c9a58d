// src/config/app.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::lexicon::{Lexicon, StopWords};

pub const DEFAULT_CONFIG_PATH: &str = "config/readability.toml";
pub const ENV_CONFIG_PATH: &str = "READABILITY_CONFIG_PATH";
pub const ENV_BIND: &str = "READABILITY_BIND";
pub const ENV_ARTICLES_DIR: &str = "READABILITY_ARTICLES_DIR";

fn default_positive_words() -> PathBuf {
    PathBuf::from("MasterDictionary/positive-words.txt")
}
fn default_negative_words() -> PathBuf {
    PathBuf::from("MasterDictionary/negative-words.txt")
}
fn default_input() -> PathBuf {
    PathBuf::from("config/articles.toml")
}
fn default_articles_dir() -> PathBuf {
    PathBuf::from("TextFiles")
}
fn default_output() -> PathBuf {
    PathBuf::from("output.csv")
}
fn default_timeout_secs() -> u64 {
    20
}
fn default_user_agent() -> String {
    format!("article-readability/{}", env!("CARGO_PKG_VERSION"))
}
fn default_content_class() -> String {
    "td-post-content tagdiv-type".to_string()
}
fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Class of the `<div>` holding the article body.
    #[serde(default = "default_content_class")]
    pub content_class: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            content_class: default_content_class(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_positive_words")]
    pub positive_words: PathBuf,
    #[serde(default = "default_negative_words")]
    pub negative_words: PathBuf,
    /// Extra stop-word lists added on top of the built-in English set.
    #[serde(default)]
    pub stopwords: Vec<PathBuf>,
    /// Article list (TOML or JSON).
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_articles_dir")]
    pub articles_dir: PathBuf,
    /// `.csv` or `.json`.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
            stopwords: Vec::new(),
            input: default_input(),
            articles_dir: default_articles_dir(),
            output: default_output(),
            fetch: FetchConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let mut cfg: AppConfig =
            toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// Resolve config the usual way:
    /// 1) explicit path (CLI `--config`)
    /// 2) $READABILITY_CONFIG_PATH
    /// 3) config/readability.toml
    /// 4) built-in defaults
    ///
    /// Env overrides ($READABILITY_BIND, $READABILITY_ARTICLES_DIR) win last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = if let Some(p) = explicit {
            Self::load_from_file(p)?
        } else if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                anyhow::bail!("{ENV_CONFIG_PATH} points to non-existent path");
            }
            Self::load_from_file(&pb)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(b) = env::var(ENV_BIND) {
            if !b.trim().is_empty() {
                self.server.bind = b.trim().to_string();
            }
        }
        if let Ok(d) = env::var(ENV_ARTICLES_DIR) {
            if !d.trim().is_empty() {
                self.articles_dir = PathBuf::from(d.trim());
            }
        }
    }

    fn sanitize(&mut self) {
        if self.fetch.timeout_secs == 0 {
            self.fetch.timeout_secs = default_timeout_secs();
        }
        if self.fetch.content_class.trim().is_empty() {
            self.fetch.content_class = default_content_class();
        }
        if self.fetch.user_agent.trim().is_empty() {
            self.fetch.user_agent = default_user_agent();
        }
    }

    /// Build the frozen word sets. Missing files fail fast.
    pub fn load_word_sets(&self) -> Result<(Lexicon, StopWords)> {
        let lexicon = Lexicon::load(&self.positive_words, &self.negative_words)?;
        let mut stopwords = StopWords::english();
        for p in &self.stopwords {
            stopwords.extend_from_file(p)?;
        }
        Ok((lexicon, stopwords))
    }
}
