//! Talent network profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate's talent network profile.
///
/// One profile per user; re-submitting the form updates the existing row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TalentProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Candidate's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Current location.
    pub current_location: String,
    /// Other locations the candidate would consider.
    pub additional_locations: Option<String>,
    /// Salary expectation as free text.
    pub salary_expectation: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin_url: Option<String>,
    /// Portfolio or personal site URL.
    pub portfolio_url: Option<String>,
    /// Storage path of the uploaded résumé, if any.
    pub resume_path: Option<String>,
    /// When the profile was first created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Form data for creating or updating a talent profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertTalentProfile {
    /// Candidate's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Current location.
    pub current_location: String,
    /// Other acceptable locations.
    pub additional_locations: Option<String>,
    /// Salary expectation.
    pub salary_expectation: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin_url: Option<String>,
    /// Portfolio URL.
    pub portfolio_url: Option<String>,
    /// Storage path of the résumé (set after upload).
    pub resume_path: Option<String>,
}
