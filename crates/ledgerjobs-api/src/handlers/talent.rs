//! Talent network handlers — profile read/submit and résumé upload.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use validator::Validate;

use ledgerjobs_core::error::AppError;

use crate::dto::request::TalentProfileRequest;
use crate::dto::response::{ApiResponse, TalentProfileResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/talent/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Option<TalentProfileResponse>>>, ApiError> {
    let profile = state.talent.profile(&auth).await?;
    let response = profile.map(|p| TalentProfileResponse::new(p, &state.config.storage));

    Ok(Json(ApiResponse::ok(response)))
}

/// PUT /api/talent/profile
pub async fn submit_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TalentProfileRequest>,
) -> Result<Json<ApiResponse<TalentProfileResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let profile = state.talent.submit(&auth, req.into()).await?;

    Ok(Json(ApiResponse::ok(TalentProfileResponse::new(
        profile,
        &state.config.storage,
    ))))
}

/// POST /api/talent/resume — multipart résumé upload
///
/// Expects a single `file` field carrying the document.
pub async fn upload_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<TalentProfileResponse>>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(ToString::to_string);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name =
        file_name.ok_or_else(|| AppError::validation("A file field with a filename is required"))?;
    let data = data.ok_or_else(|| AppError::validation("No file content received"))?;

    let profile = state.talent.upload_resume(&auth, &file_name, data).await?;

    Ok(Json(ApiResponse::ok(TalentProfileResponse::new(
        profile,
        &state.config.storage,
    ))))
}

/// GET /api/talent/resume — download the stored résumé
pub async fn download_resume(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Response, ApiError> {
    let (path, data) = state.talent.resume(&auth).await?;
    let filename = path.rsplit('/').next().unwrap_or("resume");

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, data).into_response())
}
