pub mod health;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::catalog::handlers as catalog;
use crate::scoring::handlers as scoring;
use crate::scoring::RedFlagLexicon;
use crate::state::AppState;
use crate::swipe::handlers as swipe;

/// GET /api/v1/lexicon
/// The red-flag phrases in effect, so clients can highlight them in descriptions.
async fn lexicon_handler(State(state): State<AppState>) -> Json<RedFlagLexicon> {
    Json(state.engine.lexicon().clone())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(catalog::handle_get_job))
        .route("/api/v1/taxonomy/:role", get(catalog::handle_get_taxonomy))
        .route("/api/v1/lexicon", get(lexicon_handler))
        // Match API
        .route("/api/v1/match", post(scoring::handle_match))
        .route("/api/v1/match/rank", post(scoring::handle_rank))
        // Swipe API
        .route("/api/v1/swipe/start", post(swipe::handle_start))
        .route("/api/v1/swipe", post(swipe::handle_swipe))
        .route("/api/v1/swipe/dismiss", post(swipe::handle_dismiss))
        .with_state(state)
}
