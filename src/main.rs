//! Article Readability - Binary Entrypoint
//! Batch pipeline (fetch → analyze → export) and the HTTP scoring service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use article_readability::api::{self, AppState};
use article_readability::config::AppConfig;
use article_readability::export::{self, ExportFormat};
use article_readability::ingest::{self, config::load_articles_from, store::ArticleStore};
use article_readability::ingest::providers::HttpArticleProvider;
use article_readability::telemetry::Metrics;
use article_readability::{init_tracing, Scorer};

#[derive(Parser, Debug)]
#[command(name = "article-readability", version, about)]
struct Cli {
    /// Config file (TOML). Falls back to $READABILITY_CONFIG_PATH, then config/readability.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit JSON log lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download every listed article and store its text.
    Fetch {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Score stored articles and write the result table.
    Analyze {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// csv | json (default: from output extension)
        #[arg(long)]
        format: Option<ExportFormat>,
    },
    /// Fetch, then analyze.
    Run {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        format: Option<ExportFormat>,
    },
    /// Score one file (or stdin when omitted) and print JSON.
    Score { file: Option<PathBuf> },
    /// Serve the HTTP scoring API.
    Serve {
        #[arg(long, env = "READABILITY_BIND")]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let cfg = AppConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch { input } => {
            fetch(&cfg, input).await?;
        }
        Command::Analyze {
            input,
            output,
            format,
        } => {
            analyze(&cfg, input, output, format)?;
        }
        Command::Run {
            input,
            output,
            format,
        } => {
            fetch(&cfg, input.clone()).await?;
            analyze(&cfg, input, output, format)?;
        }
        Command::Score { file } => {
            let text = match file {
                Some(p) => std::fs::read_to_string(&p)
                    .with_context(|| format!("reading {}", p.display()))?,
                None => {
                    let mut s = String::new();
                    std::io::stdin()
                        .read_to_string(&mut s)
                        .context("reading stdin")?;
                    s
                }
            };
            let scorer = build_scorer(&cfg)?;
            let rec = scorer.score(&text);
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
        Command::Serve { bind } => {
            serve(&cfg, bind).await?;
        }
    }
    Ok(())
}

/// Lexicon and stop words are built once here and frozen for the run.
fn build_scorer(cfg: &AppConfig) -> Result<Scorer> {
    let (lexicon, stopwords) = cfg.load_word_sets()?;
    Ok(Scorer::new(lexicon, stopwords))
}

async fn fetch(cfg: &AppConfig, input: Option<PathBuf>) -> Result<()> {
    let input = input.unwrap_or_else(|| cfg.input.clone());
    let articles = load_articles_from(&input)?;
    let provider = HttpArticleProvider::new(&cfg.fetch)?;
    let store = ArticleStore::new(&cfg.articles_dir);

    info!(count = articles.len(), input = %input.display(), "fetching articles");
    ingest::fetch_all(&provider, &articles, &store).await;
    Ok(())
}

fn analyze(
    cfg: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| cfg.input.clone());
    let output = output.unwrap_or_else(|| cfg.output.clone());
    let articles = load_articles_from(&input)?;
    let store = ArticleStore::new(&cfg.articles_dir);
    let scorer = build_scorer(cfg)?;

    let records = ingest::analyze_all(&scorer, &articles, &store)?;
    export::write_records(&output, &records, format)?;
    println!("Analysis completed. Results saved to: {}", output.display());
    Ok(())
}

async fn serve(cfg: &AppConfig, bind: Option<String>) -> Result<()> {
    let scorer = build_scorer(cfg)?;
    let metrics = Metrics::init()?;

    let app = api::create_router(AppState::new(scorer)).merge(metrics.router());

    let addr = bind.unwrap_or_else(|| cfg.server.bind.clone());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");
    axum::serve(listener, app).await.context("http server")?;
    Ok(())
}
