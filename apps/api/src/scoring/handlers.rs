//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{JobPosting, UserProfile};
use crate::scoring::{MatchAnalysis, RankedMatch};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Score a catalog posting (`job_id`) or an ad-hoc one (`job`). Exactly one is required.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub job_id: Option<u32>,
    #[serde(default)]
    pub job: Option<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_id: u32,
    pub analysis: MatchAnalysis,
    pub log: Vec<String>,
    pub scored_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub ranked: Vec<RankedMatch>,
    pub scored_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Returns the full match analysis for one posting plus its progress log lines.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let job = match (request.job_id, request.job) {
        (Some(id), None) => state
            .catalog
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?,
        (None, Some(job)) => {
            job.validate()?;
            job
        }
        _ => {
            return Err(AppError::Validation(
                "provide exactly one of job_id or job".to_string(),
            ))
        }
    };

    let analysis = state.engine.analyze(&request.profile, &job);
    let log = analysis.narrate(&job);

    Ok(Json(MatchResponse {
        job_id: job.id,
        analysis,
        log,
        scored_at: Utc::now(),
    }))
}

/// POST /api/v1/match/rank
///
/// Scores the whole catalog for a profile, best match first.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let jobs = state.catalog.list().await?;
    let ranked = state.engine.rank(&request.profile, &jobs);

    Ok(Json(RankResponse {
        ranked,
        scored_at: Utc::now(),
    }))
}
