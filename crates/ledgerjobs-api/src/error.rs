//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ledgerjobs_core::error::{AppError, ErrorKind};
use ledgerjobs_core::types::response::ApiErrorResponse;

/// Newtype carrying an `AppError` across the handler boundary.
///
/// Handlers return `Result<_, ApiError>`; the `From<AppError>` impl lets
/// `?` lift service errors directly.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.0.kind);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let message = if status.is_server_error() {
            // Internal detail stays in the logs.
            "An internal error occurred".to_string()
        } else {
            self.0.message.clone()
        };

        let body = ApiErrorResponse::new(error_code, message);
        (status, Json(body)).into_response()
    }
}

fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::RangeExceeded => (StatusCode::RANGE_NOT_SATISFIABLE, "RANGE_EXCEEDED"),
        ErrorKind::RateLimit => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ErrorKind::ExternalService => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_for(ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(ErrorKind::Conflict).0, StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::RangeExceeded).0,
            StatusCode::RANGE_NOT_SATISFIABLE
        );
    }

    #[test]
    fn infrastructure_errors_hide_behind_500() {
        for kind in [
            ErrorKind::Database,
            ErrorKind::Storage,
            ErrorKind::Configuration,
            ErrorKind::Serialization,
            ErrorKind::Internal,
        ] {
            assert_eq!(status_for(kind).0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn upstream_failures_are_bad_gateway() {
        assert_eq!(
            status_for(ErrorKind::ExternalService).0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(ErrorKind::ServiceUnavailable).0,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
