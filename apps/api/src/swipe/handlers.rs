//! Axum route handlers for the Swipe API.
//!
//! The client sends its `SwipeSession` with every call and stores the one it
//! gets back; the deck is the catalog in list order.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{JobPosting, UserProfile};
use crate::scoring::{MatchAnalysis, MatchEngine};
use crate::state::AppState;
use crate::swipe::{SwipeDirection, SwipeOutcome, SwipeSession};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The card on top of the deck, pre-scored for the requesting profile.
#[derive(Debug, Serialize)]
pub struct Card {
    pub job: JobPosting,
    pub analysis: MatchAnalysis,
    pub log: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub session: SwipeSession,
    pub next: Option<Card>,
    /// Profile skills outside the role's taxonomy; still scored normally.
    pub unlisted_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub profile: UserProfile,
    pub session: SwipeSession,
    pub direction: SwipeDirection,
}

#[derive(Debug, Serialize)]
pub struct SwipeResponse {
    pub session: SwipeSession,
    pub outcome: SwipeOutcome,
    pub next: Option<Card>,
}

#[derive(Debug, Deserialize)]
pub struct DismissRequest {
    pub profile: UserProfile,
    pub session: SwipeSession,
}

#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub session: SwipeSession,
    pub next: Option<Card>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/swipe/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    let deck = state.catalog.list().await?;
    let session = SwipeSession::start(deck.len());
    let next = top_card(&state.engine, &request.profile, &deck, &session);
    let unlisted_skills = state
        .taxonomy
        .unlisted_skills(request.profile.role, &request.profile.skills)
        .into_iter()
        .map(str::to_string)
        .collect();

    info!("Swipe session {} started ({} cards)", session.id, deck.len());

    Ok(Json(StartResponse {
        session,
        next,
        unlisted_skills,
    }))
}

/// POST /api/v1/swipe
///
/// Applies one swipe. A right-swipe on a red-flagged card returns
/// `toxicity_warning` and leaves the deck in place; repeat it to confirm.
pub async fn handle_swipe(
    State(state): State<AppState>,
    Json(request): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>, AppError> {
    let deck = state.catalog.list().await?;
    let mut session = request.session;
    session.check(deck.len())?;

    let job = &deck[session.position];
    let analysis = state.engine.analyze(&request.profile, job);
    let outcome = session.swipe(request.direction, job, &analysis, deck.len())?;

    let next = top_card(&state.engine, &request.profile, &deck, &session);

    Ok(Json(SwipeResponse {
        session,
        outcome,
        next,
    }))
}

/// POST /api/v1/swipe/dismiss
///
/// Backs out of a pending toxicity warning; the same card stays on top.
pub async fn handle_dismiss(
    State(state): State<AppState>,
    Json(request): Json<DismissRequest>,
) -> Result<Json<DismissResponse>, AppError> {
    let deck = state.catalog.list().await?;
    let mut session = request.session;
    session.check(deck.len())?;
    session.dismiss_warning();

    let next = top_card(&state.engine, &request.profile, &deck, &session);

    Ok(Json(DismissResponse { session, next }))
}

fn top_card(
    engine: &MatchEngine,
    profile: &UserProfile,
    deck: &[JobPosting],
    session: &SwipeSession,
) -> Option<Card> {
    if session.finished {
        return None;
    }
    let job = deck.get(session.position)?.clone();
    let analysis = engine.analyze(profile, &job);
    let log = analysis.narrate(&job);
    Some(Card { job, analysis, log })
}
