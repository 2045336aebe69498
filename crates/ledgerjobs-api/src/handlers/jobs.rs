//! Job listing handlers — paged search, point lookup, posting.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use ledgerjobs_core::error::AppError;
use ledgerjobs_core::types::pagination::PageResponse;
use ledgerjobs_entity::job::model::Job;
use ledgerjobs_entity::job::ExperienceLevel;

use crate::dto::request::CreateJobRequest;
use crate::dto::response::{ApiResponse, JobCountResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JobFilterParams};
use crate::state::AppState;

/// GET /api/jobs
///
/// Public paged search over the listings. A window past the end of the
/// matching set comes back as 416, which feed clients treat as
/// end-of-data.
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> Result<Json<ApiResponse<PageResponse<Job>>>, ApiError> {
    let (filter, window) = params.into_parts();
    let page = state.job_search.search(&filter, window).await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/jobs/count
pub async fn count_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> Result<Json<ApiResponse<JobCountResponse>>, ApiError> {
    let (filter, _) = params.into_parts();
    let count = state.job_search.count(&filter).await?;

    Ok(Json(ApiResponse::ok(JobCountResponse { count })))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state
        .job_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;

    Ok(Json(ApiResponse::ok(job)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if let Some(level) = req.experience_level.as_deref() {
        level.parse::<ExperienceLevel>()?;
    }

    let job = state.job_repo.create(&req.into()).await?;

    Ok(Json(ApiResponse::ok(job)))
}
