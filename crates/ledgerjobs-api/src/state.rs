//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use ledgerjobs_auth::session::manager::SessionManager;
use ledgerjobs_core::config::AppConfig;
use ledgerjobs_core::traits::storage::StorageProvider;
use ledgerjobs_database::repositories::{JobRepository, SavedJobRepository, UserRepository};
use ledgerjobs_service::{
    JobSearchService, NewsletterService, SavedJobService, TalentService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Résumé storage backend (health checks).
    pub storage: Arc<dyn StorageProvider>,

    /// Session lifecycle manager (signup, login, refresh, logout).
    pub session_manager: Arc<SessionManager>,

    /// Job repository (point lookups and inserts).
    pub job_repo: Arc<JobRepository>,
    /// User repository (profile reads).
    pub user_repo: Arc<UserRepository>,

    /// Paged job search.
    pub job_search: Arc<JobSearchService<JobRepository>>,
    /// Saved-job bookkeeping.
    pub saved_jobs: Arc<SavedJobService<SavedJobRepository>>,
    /// Talent profiles and résumé uploads.
    pub talent: Arc<TalentService>,
    /// Newsletter subscription proxy.
    pub newsletter: Arc<NewsletterService>,
}
