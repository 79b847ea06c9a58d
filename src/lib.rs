// src/lib.rs
// Public library surface for the binary and integration tests.

// Scoring core (pure, no I/O)
pub mod complexity;
pub mod engine;
pub mod lexicon;
pub mod pronouns;
pub mod readability;
pub mod sentiment;
pub mod syllables;
pub mod tokenize;

// Wiring: config, acquisition, export, HTTP
pub mod api;
pub mod config;
pub mod export;
pub mod ingest;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router as router;
pub use crate::engine::{score_document, score_tokens, ResultRecord, Scorer};
pub use crate::lexicon::{Lexicon, StopWords};
pub use crate::tokenize::{Tokenizer, TreebankTokenizer};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` wins over the default
/// filter; `json` switches to machine-readable lines. Safe to call twice.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("article_readability=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    let res = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
    if res.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
