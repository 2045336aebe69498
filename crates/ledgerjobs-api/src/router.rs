//! Route definitions for the LedgerJobs HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(saved_job_routes())
        .merge(talent_routes())
        .merge(newsletter_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Job search and CRUD
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::jobs::search_jobs))
        .route("/jobs", post(handlers::jobs::create_job))
        .route("/jobs/count", get(handlers::jobs::count_jobs))
        .route("/jobs/{id}", get(handlers::jobs::get_job))
}

/// Saved-job endpoints
fn saved_job_routes() -> Router<AppState> {
    Router::new()
        .route("/saved-jobs", get(handlers::saved::list_saved_jobs))
        .route("/saved-jobs/ids", get(handlers::saved::saved_job_ids))
        .route("/saved-jobs/{job_id}", post(handlers::saved::save_job))
        .route("/saved-jobs/{job_id}", delete(handlers::saved::unsave_job))
}

/// Talent network endpoints
fn talent_routes() -> Router<AppState> {
    Router::new()
        .route("/talent/profile", get(handlers::talent::get_profile))
        .route("/talent/profile", put(handlers::talent::submit_profile))
        .route(
            "/talent/resume",
            post(handlers::talent::upload_resume).get(handlers::talent::download_resume),
        )
}

/// Newsletter proxy endpoint
fn newsletter_routes() -> Router<AppState> {
    Router::new().route(
        "/newsletter/subscribe",
        post(handlers::newsletter::subscribe),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
