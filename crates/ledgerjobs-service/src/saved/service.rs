//! Saving and unsaving listings.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use ledgerjobs_core::error::ErrorKind;
use ledgerjobs_core::result::AppResult;
use ledgerjobs_entity::saved_job::SavedJobView;

use crate::context::RequestContext;

use super::store::SavedJobStore;

/// How a save request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new bookmark was created.
    Saved,
    /// The listing was already saved; treated as success.
    AlreadySaved,
}

/// Bookmark operations for the signed-in user.
#[derive(Debug, Clone)]
pub struct SavedJobService<S: SavedJobStore> {
    store: Arc<S>,
}

impl<S: SavedJobStore> SavedJobService<S> {
    /// Creates a new saved job service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Save a listing for the current user.
    ///
    /// Saving twice is idempotent: a duplicate-pair conflict from the
    /// store (including one raised by a concurrent double-click) is
    /// reported as [`SaveOutcome::AlreadySaved`], not an error.
    pub async fn save(&self, ctx: &RequestContext, job_id: Uuid) -> AppResult<SaveOutcome> {
        match self.store.save(ctx.user_id, job_id).await {
            Ok(_) => Ok(SaveOutcome::Saved),
            Err(e) if e.kind == ErrorKind::Conflict => {
                debug!(user_id = %ctx.user_id, %job_id, "Job was already saved");
                Ok(SaveOutcome::AlreadySaved)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a bookmark. Removing one that does not exist is a no-op.
    pub async fn unsave(&self, ctx: &RequestContext, job_id: Uuid) -> AppResult<()> {
        let removed = self.store.unsave(ctx.user_id, job_id).await?;
        if !removed {
            debug!(user_id = %ctx.user_id, %job_id, "No bookmark to remove");
        }
        Ok(())
    }

    /// The user's bookmarks with their listings, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<SavedJobView>> {
        self.store.list_with_jobs(ctx.user_id).await
    }

    /// IDs of the listings the user has saved, for marking search results.
    pub async fn saved_ids(&self, ctx: &RequestContext) -> AppResult<Vec<Uuid>> {
        self.store.job_ids_for_user(ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use ledgerjobs_core::error::AppError;
    use ledgerjobs_entity::saved_job::SavedJob;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory store enforcing the unique (user, job) pair.
    #[derive(Default)]
    struct MemStore {
        pairs: Mutex<HashSet<(Uuid, Uuid)>>,
    }

    #[async_trait]
    impl SavedJobStore for MemStore {
        async fn save(&self, user_id: Uuid, job_id: Uuid) -> AppResult<SavedJob> {
            let mut pairs = self.pairs.lock().unwrap();
            if !pairs.insert((user_id, job_id)) {
                return Err(AppError::conflict("already saved"));
            }
            Ok(SavedJob {
                id: Uuid::new_v4(),
                user_id,
                job_id,
                created_at: Utc::now(),
            })
        }

        async fn unsave(&self, user_id: Uuid, job_id: Uuid) -> AppResult<bool> {
            Ok(self.pairs.lock().unwrap().remove(&(user_id, job_id)))
        }

        async fn list_with_jobs(&self, _user_id: Uuid) -> AppResult<Vec<SavedJobView>> {
            Ok(Vec::new())
        }

        async fn job_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
            Ok(self
                .pairs
                .lock()
                .unwrap()
                .iter()
                .filter(|(u, _)| *u == user_id)
                .map(|(_, j)| *j)
                .collect())
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), Uuid::new_v4(), "c@example.ie".to_string())
    }

    #[tokio::test]
    async fn duplicate_save_is_success() {
        let service = SavedJobService::new(Arc::new(MemStore::default()));
        let ctx = ctx();
        let job_id = Uuid::new_v4();

        assert_eq!(service.save(&ctx, job_id).await.unwrap(), SaveOutcome::Saved);
        assert_eq!(
            service.save(&ctx, job_id).await.unwrap(),
            SaveOutcome::AlreadySaved
        );
        assert_eq!(service.saved_ids(&ctx).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_saves_both_succeed() {
        let service = Arc::new(SavedJobService::new(Arc::new(MemStore::default())));
        let ctx = ctx();
        let job_id = Uuid::new_v4();

        let a = tokio::spawn({
            let service = Arc::clone(&service);
            let ctx = ctx.clone();
            async move { service.save(&ctx, job_id).await }
        });
        let b = tokio::spawn({
            let service = Arc::clone(&service);
            let ctx = ctx.clone();
            async move { service.save(&ctx, job_id).await }
        });

        let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
        // One wins the insert, the other sees the conflict; both succeed.
        assert!(matches!(
            (a, b),
            (SaveOutcome::Saved, SaveOutcome::AlreadySaved)
                | (SaveOutcome::AlreadySaved, SaveOutcome::Saved)
        ));
        assert_eq!(service.saved_ids(&ctx).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unsave_missing_bookmark_is_a_noop() {
        let service = SavedJobService::new(Arc::new(MemStore::default()));
        let ctx = ctx();
        service.unsave(&ctx, Uuid::new_v4()).await.unwrap();
    }
}
