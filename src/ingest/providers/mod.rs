// src/ingest/providers/mod.rs
pub mod fixture;
pub mod http;

pub use fixture::FixtureProvider;
pub use http::HttpArticleProvider;
