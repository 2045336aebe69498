//! Saved job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::job::Job;

/// A bookmark linking a user to a listing.
///
/// At most one row exists per (user, job) pair; the database enforces
/// this with a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJob {
    /// Unique bookmark identifier.
    pub id: Uuid,
    /// The user who saved the listing.
    pub user_id: Uuid,
    /// The saved listing.
    pub job_id: Uuid,
    /// When the bookmark was created.
    pub created_at: DateTime<Utc>,
}

/// A bookmark joined with its listing, as returned by the saved-jobs page.
///
/// The query must alias the bookmark columns (`s.id AS saved_id`,
/// `s.created_at AS saved_at`) and select the listing columns unaliased.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedJobView {
    /// Bookmark identifier.
    pub saved_id: Uuid,
    /// When the listing was saved.
    pub saved_at: DateTime<Utc>,
    /// The listing itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
}
