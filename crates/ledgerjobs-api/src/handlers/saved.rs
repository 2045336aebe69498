//! Saved-job handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use ledgerjobs_entity::saved_job::model::SavedJobView;

use crate::dto::response::{ApiResponse, MessageResponse, SaveJobResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/saved-jobs/{job_id}
///
/// Saving a job that is already saved succeeds and reports it.
pub async fn save_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SaveJobResponse>>, ApiError> {
    let outcome = state.saved_jobs.save(&auth, job_id).await?;

    Ok(Json(ApiResponse::ok(SaveJobResponse::from(outcome))))
}

/// DELETE /api/saved-jobs/{job_id}
pub async fn unsave_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.saved_jobs.unsave(&auth, job_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Job removed from saved list".to_string(),
    })))
}

/// GET /api/saved-jobs
pub async fn list_saved_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SavedJobView>>>, ApiError> {
    let saved = state.saved_jobs.list(&auth).await?;

    Ok(Json(ApiResponse::ok(saved)))
}

/// GET /api/saved-jobs/ids
///
/// Lightweight id list used to mark saved jobs in search results.
pub async fn saved_job_ids(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Uuid>>>, ApiError> {
    let ids = state.saved_jobs.saved_ids(&auth).await?;

    Ok(Json(ApiResponse::ok(ids)))
}
