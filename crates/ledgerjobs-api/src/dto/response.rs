//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledgerjobs_core::config::StorageConfig;
use ledgerjobs_entity::talent::model::TalentProfile;
use ledgerjobs_entity::user::model::User;
use ledgerjobs_service::SaveOutcome;
use ledgerjobs_storage::resume_public_url;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login / signup / refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// Authenticated user, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Save-job response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveJobResponse {
    /// The job is saved after this call (both fresh and duplicate saves).
    pub saved: bool,
    /// Whether the job was already in the saved list.
    pub already_saved: bool,
}

impl From<SaveOutcome> for SaveJobResponse {
    fn from(outcome: SaveOutcome) -> Self {
        Self {
            saved: true,
            already_saved: matches!(outcome, SaveOutcome::AlreadySaved),
        }
    }
}

/// Talent profile with the résumé resolved to a public URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentProfileResponse {
    /// The stored profile fields.
    #[serde(flatten)]
    pub profile: TalentProfile,
    /// Public download URL of the stored résumé, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl TalentProfileResponse {
    /// Resolve the profile's résumé path against the storage config.
    pub fn new(profile: TalentProfile, storage: &StorageConfig) -> Self {
        let resume_url = profile
            .resume_path
            .as_deref()
            .map(|path| resume_public_url(storage, path));
        Self {
            profile,
            resume_url,
        }
    }
}

/// Match count for a filtered job search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCountResponse {
    /// Number of listings matching the filter.
    pub count: u64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Résumé storage status.
    pub storage: String,
}
