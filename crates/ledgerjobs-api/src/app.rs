//! Application builder — wires services + router + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use ledgerjobs_auth::session::manager::SessionManager;
use ledgerjobs_core::config::AppConfig;
use ledgerjobs_core::error::AppError;
use ledgerjobs_core::traits::storage::StorageProvider;
use ledgerjobs_database::repositories::{
    JobRepository, SavedJobRepository, SessionRepository, TalentProfileRepository, UserRepository,
};
use ledgerjobs_service::{JobSearchService, NewsletterService, SavedJobService, TalentService};
use ledgerjobs_storage::LocalStorageProvider;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
    let saved_repo = Arc::new(SavedJobRepository::new(db_pool.clone()));
    let talent_repo = Arc::new(TalentProfileRepository::new(db_pool.clone()));

    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&user_repo),
        Arc::clone(&session_repo),
        config.auth.clone(),
    ));

    let storage: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.data_root).await?);

    let job_search = Arc::new(JobSearchService::new(Arc::clone(&job_repo)));
    let saved_jobs = Arc::new(SavedJobService::new(Arc::clone(&saved_repo)));
    let talent = Arc::new(TalentService::new(
        Arc::clone(&talent_repo),
        Arc::clone(&storage),
        config.storage.clone(),
    ));
    let newsletter = Arc::new(NewsletterService::new(config.newsletter.clone())?);

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        storage,
        session_manager,
        job_repo,
        user_repo,
        job_search,
        saved_jobs,
        talent,
        newsletter,
    })
}

/// Runs the LedgerJobs server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await?;

    // One-shot cleanup of long-expired sessions on startup.
    let session_repo = SessionRepository::new(state.db_pool.clone());
    match session_repo.delete_expired().await {
        Ok(0) => {}
        Ok(n) => tracing::info!(count = n, "Removed expired sessions"),
        Err(e) => tracing::warn!(error = %e, "Expired-session cleanup failed"),
    }

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LedgerJobs server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
