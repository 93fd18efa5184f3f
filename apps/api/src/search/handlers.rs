//! Axum route handlers for the job search API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::search::{
    count_active_filters, filter_jobs_with, rank_jobs, FilterCriteria, GroupMode, SortOrder,
};
use crate::state::AppState;
use crate::store::{fetch_with_fallback, FetchOrigin, Fetched};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub criteria: FilterCriteria,
    pub sort: SortOrder,
    /// Overrides the configured `FILTER_GROUP_MODE` for this query.
    pub group_mode: Option<GroupMode>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
    pub active_filters: usize,
    pub group_mode: GroupMode,
    pub origin: FetchOrigin,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
    pub origin: FetchOrigin,
}

#[derive(Debug, Serialize)]
pub struct FilterCountResponse {
    pub active_filters: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn load_jobs(state: &AppState) -> Fetched {
    fetch_with_fallback(
        state.jobs.as_ref(),
        state.config.jobs_fetch_timeout,
        state.fallback_jobs.as_ref().clone(),
    )
    .await
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let Fetched { jobs, origin } = load_jobs(&state).await;
    Json(JobListResponse {
        total: jobs.len(),
        jobs,
        origin,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let Fetched { jobs, .. } = load_jobs(&state).await;
    jobs.into_iter()
        .find(|job| job.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/jobs/search
///
/// Filters the current listings with the posted criteria, then orders them.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let Fetched { jobs, origin } = load_jobs(&state).await;
    let group_mode = request
        .group_mode
        .unwrap_or(state.config.filter_group_mode);

    let filtered = filter_jobs_with(&jobs, &request.criteria, group_mode);
    debug!(
        listed = jobs.len(),
        matched = filtered.len(),
        %group_mode,
        "Job search filtered"
    );
    let ranked = rank_jobs(filtered, request.sort);

    Json(SearchResponse {
        total: ranked.len(),
        jobs: ranked,
        active_filters: count_active_filters(&request.criteria),
        group_mode,
        origin,
    })
}

/// POST /api/v1/jobs/filters/count
pub async fn handle_count_filters(Json(criteria): Json<FilterCriteria>) -> Json<FilterCountResponse> {
    Json(FilterCountResponse {
        active_filters: count_active_filters(&criteria),
    })
}
