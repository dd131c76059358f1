//! Axum route handlers for the catalog API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::taxonomy::SkillTiers;
use crate::errors::AppError;
use crate::models::{JobPosting, Role};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub role: Role,
    pub tiers: SkillTiers,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state.catalog.list().await?;
    Ok(Json(JobListResponse { jobs }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .catalog
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// GET /api/v1/taxonomy/:role
pub async fn handle_get_taxonomy(
    State(state): State<AppState>,
    Path(role): Path<Role>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    let tiers = state
        .taxonomy
        .skills_for(role)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No skills listed for {}", role.as_str())))?;
    Ok(Json(TaxonomyResponse { role, tiers }))
}
