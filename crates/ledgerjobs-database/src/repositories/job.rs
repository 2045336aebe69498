//! Job listing repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ledgerjobs_core::error::{AppError, ErrorKind};
use ledgerjobs_core::result::AppResult;
use ledgerjobs_core::types::pagination::PageWindow;
use ledgerjobs_core::types::query::{JobFilter, JobQuery, QueryMode};
use ledgerjobs_entity::job::model::{CreateJob, Job};

use crate::sql;

/// Repository for job listing queries and writes.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a listing by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Count listings matching the filter.
    pub async fn count(&self, filter: &JobFilter) -> AppResult<u64> {
        let query = JobQuery::build(filter, QueryMode::Count);
        let total: i64 = sql::build_count(&query)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(total as u64)
    }

    /// Fetch one page of listings matching the filter, sorted by the
    /// standard precedence (posted date, salary range, experience).
    pub async fn search_page(&self, filter: &JobFilter, window: PageWindow) -> AppResult<Vec<Job>> {
        let query = JobQuery::build(filter, QueryMode::Page(window));
        sql::build_select(&query)
            .build_query_as::<Job>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search jobs", e))
    }

    /// Create a new listing.
    pub async fn create(&self, data: &CreateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (title, company, description, location, location_category, city, \
             routine, employment_type, experience_level, min_experience, salary_min, salary_max, \
             salary_range, perks, job_url, posted_date, closing_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.company)
        .bind(&data.description)
        .bind(&data.location)
        .bind(&data.location_category)
        .bind(&data.city)
        .bind(&data.routine)
        .bind(&data.employment_type)
        .bind(&data.experience_level)
        .bind(data.min_experience)
        .bind(data.salary_min)
        .bind(data.salary_max)
        .bind(&data.salary_range)
        .bind(&data.perks)
        .bind(&data.job_url)
        .bind(data.posted_date)
        .bind(data.closing_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Count all listings.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))
    }
}
