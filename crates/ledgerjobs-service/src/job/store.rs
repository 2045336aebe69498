//! Job read seam between the feed logic and the database.

use async_trait::async_trait;

use ledgerjobs_core::result::AppResult;
use ledgerjobs_core::types::pagination::PageWindow;
use ledgerjobs_core::types::query::JobFilter;
use ledgerjobs_database::repositories::JobRepository;
use ledgerjobs_entity::job::Job;

/// Read access to job listings.
///
/// The feed and search services run against this trait so their logic
/// can be exercised without a database.
#[async_trait]
pub trait JobStore: Send + Sync + 'static {
    /// Count listings matching the filter.
    async fn count(&self, filter: &JobFilter) -> AppResult<u64>;

    /// Fetch one page of listings matching the filter, in the standard
    /// sort order.
    async fn fetch_page(&self, filter: &JobFilter, window: PageWindow) -> AppResult<Vec<Job>>;
}

#[async_trait]
impl JobStore for JobRepository {
    async fn count(&self, filter: &JobFilter) -> AppResult<u64> {
        JobRepository::count(self, filter).await
    }

    async fn fetch_page(&self, filter: &JobFilter, window: PageWindow) -> AppResult<Vec<Job>> {
        self.search_page(filter, window).await
    }
}
