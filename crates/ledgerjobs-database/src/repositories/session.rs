//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ledgerjobs_core::error::{AppError, ErrorKind};
use ledgerjobs_core::result::AppResult;
use ledgerjobs_entity::session::model::{CreateSession, Session};

/// Repository for login sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (id, user_id, refresh_token_hash, ip_address, user_agent, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.id)
        .bind(data.user_id)
        .bind(&data.refresh_token_hash)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a session by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Find a live session by the hash of its refresh token.
    pub async fn find_by_refresh_hash(&self, hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions \
             WHERE refresh_token_hash = $1 AND revoked_at IS NULL AND expires_at > NOW()",
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
        })
    }

    /// Replace the refresh token hash after a rotation.
    pub async fn update_refresh_hash(&self, id: Uuid, hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET refresh_token_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update refresh token", e)
            })?;
        Ok(())
    }

    /// Revoke a session. Returns whether a live session was revoked.
    pub async fn revoke(&self, id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to revoke session", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions that expired more than a day ago.
    pub async fn delete_expired(&self) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM sessions WHERE expires_at < NOW() - INTERVAL '1 day'")
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete expired sessions", e)
                })?;
        Ok(result.rows_affected())
    }
}
