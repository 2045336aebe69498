//! Talent profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ledgerjobs_core::error::{AppError, ErrorKind};
use ledgerjobs_core::result::AppResult;
use ledgerjobs_entity::talent::model::{TalentProfile, UpsertTalentProfile};

/// Repository for talent network profiles.
#[derive(Debug, Clone)]
pub struct TalentProfileRepository {
    pool: PgPool,
}

impl TalentProfileRepository {
    /// Create a new talent profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user's profile, if they have submitted one.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<TalentProfile>> {
        sqlx::query_as::<_, TalentProfile>("SELECT * FROM talent_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find talent profile", e)
            })
    }

    /// Create or update a user's profile.
    ///
    /// A resubmission replaces every form field; the résumé path is kept
    /// when the new submission omits one.
    pub async fn upsert(&self, user_id: Uuid, data: &UpsertTalentProfile) -> AppResult<TalentProfile> {
        sqlx::query_as::<_, TalentProfile>(
            "INSERT INTO talent_profiles \
             (user_id, full_name, email, current_location, additional_locations, \
              salary_expectation, linkedin_url, portfolio_url, resume_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (user_id) DO UPDATE SET \
             full_name = EXCLUDED.full_name, \
             email = EXCLUDED.email, \
             current_location = EXCLUDED.current_location, \
             additional_locations = EXCLUDED.additional_locations, \
             salary_expectation = EXCLUDED.salary_expectation, \
             linkedin_url = EXCLUDED.linkedin_url, \
             portfolio_url = EXCLUDED.portfolio_url, \
             resume_path = COALESCE(EXCLUDED.resume_path, talent_profiles.resume_path), \
             updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.current_location)
        .bind(&data.additional_locations)
        .bind(&data.salary_expectation)
        .bind(&data.linkedin_url)
        .bind(&data.portfolio_url)
        .bind(&data.resume_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert talent profile", e)
        })
    }

    /// Record the storage path of an uploaded résumé.
    pub async fn set_resume_path(&self, user_id: Uuid, path: &str) -> AppResult<TalentProfile> {
        sqlx::query_as::<_, TalentProfile>(
            "UPDATE talent_profiles SET resume_path = $2, updated_at = NOW() \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set resume path", e))?
        .ok_or_else(|| AppError::not_found(format!("No talent profile for user {user_id}")))
    }
}
