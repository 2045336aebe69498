//! Newsletter subscription handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use ledgerjobs_core::error::AppError;

use crate::dto::request::SubscribeRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/newsletter/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state.newsletter.subscribe(&req.email).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Subscribed to the newsletter".to_string(),
    })))
}
