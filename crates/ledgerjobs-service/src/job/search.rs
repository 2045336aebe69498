//! One-shot job search with total counts.

use std::sync::Arc;

use ledgerjobs_core::error::AppError;
use ledgerjobs_core::result::AppResult;
use ledgerjobs_core::types::pagination::{PageResponse, PageWindow};
use ledgerjobs_core::types::query::JobFilter;
use ledgerjobs_entity::job::Job;

use super::store::JobStore;

/// Stateless search over job listings.
///
/// Unlike the feed, which accumulates pages, this answers a single
/// request with one page plus the total match count — what the HTTP
/// API returns per call.
#[derive(Debug, Clone)]
pub struct JobSearchService<S: JobStore> {
    store: Arc<S>,
}

impl<S: JobStore> JobSearchService<S> {
    /// Creates a new search service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch one page of matches and the total count for the filter.
    ///
    /// A window that starts past the end of the result set is reported
    /// as a range error so the feed can treat it as end-of-data.
    pub async fn search(
        &self,
        filter: &JobFilter,
        window: PageWindow,
    ) -> AppResult<PageResponse<Job>> {
        let total = self.store.count(filter).await?;

        if window.offset() >= total && total > 0 {
            return Err(AppError::range_exceeded(format!(
                "Page {} starts at row {} but only {} rows match",
                window.page,
                window.offset(),
                total
            )));
        }

        let items = self.store.fetch_page(filter, window).await?;
        Ok(PageResponse::new(items, &window, total))
    }

    /// Total number of listings matching the filter, without fetching a page.
    pub async fn count(&self, filter: &JobFilter) -> AppResult<u64> {
        self.store.count(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use ledgerjobs_core::error::ErrorKind;
    use uuid::Uuid;

    struct FixedStore {
        total: u64,
        page: Vec<Job>,
    }

    fn job(title: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Shannon Audit".to_string(),
            description: String::new(),
            location: "Limerick".to_string(),
            location_category: Some("limerick".to_string()),
            city: None,
            routine: None,
            employment_type: None,
            experience_level: None,
            min_experience: None,
            salary_min: None,
            salary_max: None,
            salary_range: None,
            perks: None,
            job_url: "https://example.com".to_string(),
            posted_date: None,
            closing_date: None,
            created_at: Utc::now(),
        }
    }

    #[async_trait]
    impl JobStore for FixedStore {
        async fn count(&self, _filter: &JobFilter) -> AppResult<u64> {
            Ok(self.total)
        }

        async fn fetch_page(
            &self,
            _filter: &JobFilter,
            _window: PageWindow,
        ) -> AppResult<Vec<Job>> {
            Ok(self.page.clone())
        }
    }

    #[tokio::test]
    async fn reports_total_and_has_more() {
        let service = JobSearchService::new(Arc::new(FixedStore {
            total: 60,
            page: (0..24).map(|i| job(&format!("j{i}"))).collect(),
        }));

        let page = service
            .search(&JobFilter::default(), PageWindow::new(0))
            .await
            .unwrap();
        assert_eq!(page.total_count, 60);
        assert_eq!(page.items.len(), 24);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn window_past_end_is_a_range_error() {
        let service = JobSearchService::new(Arc::new(FixedStore {
            total: 10,
            page: Vec::new(),
        }));

        let err = service
            .search(&JobFilter::default(), PageWindow::new(3))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeExceeded);
    }

    #[tokio::test]
    async fn empty_result_set_is_not_an_error() {
        let service = JobSearchService::new(Arc::new(FixedStore {
            total: 0,
            page: Vec::new(),
        }));

        let page = service
            .search(&JobFilter::default(), PageWindow::new(0))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }
}
