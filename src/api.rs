use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::engine::{ResultRecord, Scorer};

#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
}

impl AppState {
    pub fn new(scorer: Scorer) -> Self {
        Self { scorer }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/score", post(score))
        .route("/batch", post(score_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct ScoreReq {
    pub text: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

async fn score(State(state): State<AppState>, Json(body): Json<ScoreReq>) -> Json<ResultRecord> {
    Json(state.scorer.score_with_ids(&body.text, body.id, body.url))
}

async fn score_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<ScoreReq>>,
) -> Json<Vec<ResultRecord>> {
    let scored = items
        .into_iter()
        .map(|it| state.scorer.score_with_ids(&it.text, it.id, it.url))
        .collect::<Vec<_>>();
    Json(scored)
}
