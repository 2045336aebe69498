//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it against the session store, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use ledgerjobs_auth::jwt::Claims;
use ledgerjobs_core::error::AppError;
use ledgerjobs_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Context passed into service calls.
    pub ctx: RequestContext,
    /// Validated claims from the presented access token.
    pub claims: Claims,
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.ctx
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Decodes the token and checks the backing session is still live.
        let claims = state.session_manager.validate(token).await?;

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.email.clone(),
        );

        Ok(AuthUser { ctx, claims })
    }
}
