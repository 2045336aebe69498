//! Bookmark persistence seam.

use async_trait::async_trait;
use uuid::Uuid;

use ledgerjobs_core::result::AppResult;
use ledgerjobs_database::repositories::SavedJobRepository;
use ledgerjobs_entity::saved_job::{SavedJob, SavedJobView};

/// Persistence operations for saved-job bookmarks.
#[async_trait]
pub trait SavedJobStore: Send + Sync + 'static {
    /// Insert a bookmark. A duplicate pair must surface as a conflict
    /// error; a missing listing as not-found.
    async fn save(&self, user_id: Uuid, job_id: Uuid) -> AppResult<SavedJob>;

    /// Delete a bookmark, reporting whether one existed.
    async fn unsave(&self, user_id: Uuid, job_id: Uuid) -> AppResult<bool>;

    /// All bookmarks for a user joined with their listings.
    async fn list_with_jobs(&self, user_id: Uuid) -> AppResult<Vec<SavedJobView>>;

    /// IDs of the listings a user has saved.
    async fn job_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>>;
}

#[async_trait]
impl SavedJobStore for SavedJobRepository {
    async fn save(&self, user_id: Uuid, job_id: Uuid) -> AppResult<SavedJob> {
        SavedJobRepository::save(self, user_id, job_id).await
    }

    async fn unsave(&self, user_id: Uuid, job_id: Uuid) -> AppResult<bool> {
        SavedJobRepository::unsave(self, user_id, job_id).await
    }

    async fn list_with_jobs(&self, user_id: Uuid) -> AppResult<Vec<SavedJobView>> {
        SavedJobRepository::list_with_jobs(self, user_id).await
    }

    async fn job_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        SavedJobRepository::job_ids_for_user(self, user_id).await
    }
}
