//! Saved job repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ledgerjobs_core::error::{AppError, ErrorKind};
use ledgerjobs_core::result::AppResult;
use ledgerjobs_entity::saved_job::model::{SavedJob, SavedJobView};

/// Repository for saved job bookmarks.
#[derive(Debug, Clone)]
pub struct SavedJobRepository {
    pool: PgPool,
}

impl SavedJobRepository {
    /// Create a new saved job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Save a listing for a user.
    ///
    /// Maps the unique-pair violation to a conflict error and a missing
    /// listing to not-found, so callers can tell the two apart.
    pub async fn save(&self, user_id: Uuid, job_id: Uuid) -> AppResult<SavedJob> {
        sqlx::query_as::<_, SavedJob>(
            "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("saved_jobs_user_id_job_id_key") =>
            {
                AppError::conflict(format!("Job {job_id} is already saved"))
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("saved_jobs_job_id_fkey") =>
            {
                AppError::not_found(format!("Job {job_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save job", e),
        })
    }

    /// Remove a user's bookmark for a listing. Returns whether a row
    /// was deleted.
    pub async fn unsave(&self, user_id: Uuid, job_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unsave job", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's bookmarks joined with their listings, most recently
    /// saved first.
    pub async fn list_with_jobs(&self, user_id: Uuid) -> AppResult<Vec<SavedJobView>> {
        sqlx::query_as::<_, SavedJobView>(
            "SELECT s.id AS saved_id, s.created_at AS saved_at, j.* \
             FROM saved_jobs s JOIN jobs j ON j.id = s.job_id \
             WHERE s.user_id = $1 ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved jobs", e))
    }

    /// Listing IDs the user has saved, for marking search results.
    pub async fn job_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar("SELECT job_id FROM saved_jobs WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list saved job ids", e)
            })
    }
}
