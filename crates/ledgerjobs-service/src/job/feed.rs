//! Incremental job feed with stale-response protection.
//!
//! [`JobFeed`] accumulates pages of search results for one filter state.
//! Every filter change starts a new *epoch*; a response that comes back
//! carrying an older epoch is discarded without touching the accumulated
//! list, so a slow page-2 fetch can never leak rows from the previous
//! filter into the new results.
//!
//! The fetch cycle is split into [`JobFeed::begin_load`] (hand out a
//! request token, at most one in flight) and [`JobFeed::apply_page`]
//! (fold the response back in), with [`JobFeed::load_next`] composing
//! the two over a [`JobStore`].

use std::sync::Arc;

use tracing::debug;

use ledgerjobs_core::error::ErrorKind;
use ledgerjobs_core::result::AppResult;
use ledgerjobs_core::types::pagination::{PAGE_SIZE, PageWindow};
use ledgerjobs_core::types::query::JobFilter;
use ledgerjobs_entity::job::Job;

use super::store::JobStore;

/// A ticket for one in-flight page fetch.
///
/// Carries everything the fetch needs plus the epoch it belongs to, so
/// the feed can recognise responses from a superseded filter state.
#[derive(Debug, Clone)]
pub struct FeedRequest {
    /// Epoch the request was issued under.
    pub epoch: u64,
    /// Filter state snapshot for the fetch.
    pub filter: JobFilter,
    /// The page to fetch.
    pub window: PageWindow,
}

/// What applying a page response did to the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Rows were folded in; `appended` is how many arrived.
    Loaded { appended: usize },
    /// The store reported the window lies past the end of the data.
    EndOfData,
    /// The response belonged to an older epoch and was discarded.
    Stale,
}

/// Accumulates paged search results for the active filter.
#[derive(Debug)]
pub struct JobFeed<S: JobStore> {
    store: Arc<S>,
    filter: JobFilter,
    jobs: Vec<Job>,
    /// Next page to fetch (0-based).
    next_page: u64,
    has_more: bool,
    /// Total match count for the current epoch, once a first page has
    /// established it.
    total_count: Option<u64>,
    epoch: u64,
    in_flight: bool,
}

impl<S: JobStore> JobFeed<S> {
    /// Create a feed over the default (cleared) filter.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            filter: JobFilter::default(),
            jobs: Vec::new(),
            next_page: 0,
            has_more: true,
            total_count: None,
            epoch: 0,
            in_flight: false,
        }
    }

    /// The active filter.
    pub fn filter(&self) -> &JobFilter {
        &self.filter
    }

    /// The accumulated rows, in fetch order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Whether another page may exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Whether the outstanding fetch is for the first page of an epoch.
    ///
    /// Clients render this as a full-list placeholder rather than a
    /// load-more footer.
    pub fn is_initial_load(&self) -> bool {
        self.in_flight && self.next_page == 0
    }

    /// Total match count for the current epoch, if established.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// The current epoch. Bumped on every filter change.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Replace the filter state.
    ///
    /// A genuine change starts a new epoch and rewinds to page zero; the
    /// accumulated rows stay visible until the first page of the new
    /// epoch replaces them. Setting an identical filter is a no-op.
    pub fn set_filter(&mut self, filter: JobFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.epoch += 1;
        self.next_page = 0;
        self.has_more = true;
        self.total_count = None;
        self.in_flight = false;
        debug!(epoch = self.epoch, "Feed filter changed");
    }

    /// Rewind to page zero under the current filter, starting a new epoch.
    pub fn refresh(&mut self) {
        self.epoch += 1;
        self.next_page = 0;
        self.has_more = true;
        self.total_count = None;
        self.in_flight = false;
    }

    /// Hand out a request token for the next page.
    ///
    /// Returns `None` while a fetch is outstanding or once the end of the
    /// data has been reached.
    pub fn begin_load(&mut self) -> Option<FeedRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        // Once the total is known, a page that would start at or past it
        // is end-of-data without a round trip.
        if let Some(total) = self.total_count {
            if self.next_page > 0 && self.next_page * PAGE_SIZE >= total {
                self.has_more = false;
                return None;
            }
        }
        self.in_flight = true;
        Some(FeedRequest {
            epoch: self.epoch,
            filter: self.filter.clone(),
            window: PageWindow::new(self.next_page),
        })
    }

    /// Fold a page response back into the feed.
    ///
    /// A token from an older epoch is discarded outright — it neither
    /// changes rows nor clears the in-flight flag of the current epoch.
    /// Page zero replaces the accumulated rows, any later page appends.
    /// A short page marks the end of the data; a `RangeExceeded` error
    /// from the store is treated the same way. Any other error clears
    /// the in-flight flag, leaves the rows untouched, and propagates.
    pub fn apply_page(
        &mut self,
        request: &FeedRequest,
        result: AppResult<Vec<Job>>,
    ) -> AppResult<FeedOutcome> {
        if request.epoch != self.epoch {
            debug!(
                request_epoch = request.epoch,
                current_epoch = self.epoch,
                "Discarding stale feed response"
            );
            return Ok(FeedOutcome::Stale);
        }
        self.in_flight = false;

        let items = match result {
            Ok(items) => items,
            Err(e) if e.kind == ErrorKind::RangeExceeded => {
                self.has_more = false;
                return Ok(FeedOutcome::EndOfData);
            }
            Err(e) => return Err(e),
        };

        let appended = items.len();
        self.has_more = appended as u64 >= request.window.page_size;
        if request.window.page == 0 {
            self.jobs = items;
        } else {
            self.jobs.extend(items);
        }
        self.next_page = request.window.page + 1;

        debug!(
            appended,
            total = self.jobs.len(),
            has_more = self.has_more,
            "Feed page applied"
        );
        Ok(FeedOutcome::Loaded { appended })
    }

    /// Fetch and apply the next page from the store.
    pub async fn load_next(&mut self) -> AppResult<FeedOutcome> {
        let Some(request) = self.begin_load() else {
            return Ok(FeedOutcome::Loaded { appended: 0 });
        };
        let store = Arc::clone(&self.store);
        if request.window.page == 0 {
            match store.count(&request.filter).await {
                Ok(total) => self.total_count = Some(total),
                Err(e) => {
                    self.in_flight = false;
                    return Err(e);
                }
            }
        }
        let result = store.fetch_page(&request.filter, request.window).await;
        self.apply_page(&request, result)
    }

    /// Apply a new filter and load its first page.
    pub async fn apply_filter(&mut self, filter: JobFilter) -> AppResult<FeedOutcome> {
        self.set_filter(filter);
        self.load_next().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use ledgerjobs_core::error::AppError;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn job(title: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Brook & Co".to_string(),
            description: "Practice role".to_string(),
            location: "Dublin".to_string(),
            location_category: Some("dublin".to_string()),
            city: Some("Dublin".to_string()),
            routine: Some("hybrid".to_string()),
            employment_type: None,
            experience_level: Some("mid".to_string()),
            min_experience: Some(2),
            salary_min: Some(55_000),
            salary_max: Some(70_000),
            salary_range: None,
            perks: None,
            job_url: "https://example.com/j".to_string(),
            posted_date: Some(Utc::now()),
            closing_date: None,
            created_at: Utc::now(),
        }
    }

    fn full_page(prefix: &str) -> Vec<Job> {
        (0..PAGE_SIZE).map(|i| job(&format!("{prefix}-{i}"))).collect()
    }

    /// Store that pops pre-queued responses in order.
    struct ScriptedStore {
        responses: Mutex<Vec<AppResult<Vec<Job>>>>,
        total: u64,
    }

    impl ScriptedStore {
        fn new(responses: Vec<AppResult<Vec<Job>>>) -> Arc<Self> {
            Self::with_total(responses, 1_000)
        }

        fn with_total(responses: Vec<AppResult<Vec<Job>>>, total: u64) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                total,
            })
        }
    }

    #[async_trait]
    impl JobStore for ScriptedStore {
        async fn count(&self, _filter: &JobFilter) -> AppResult<u64> {
            Ok(self.total)
        }

        async fn fetch_page(
            &self,
            _filter: &JobFilter,
            _window: PageWindow,
        ) -> AppResult<Vec<Job>> {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok(Vec::new())
            } else {
                responses.remove(0)
            }
        }
    }

    #[tokio::test]
    async fn first_page_replaces_later_pages_append() {
        let store = ScriptedStore::new(vec![Ok(full_page("a")), Ok(vec![job("b-0")])]);
        let mut feed = JobFeed::new(store);

        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::Loaded { appended: PAGE_SIZE as usize });
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize);
        assert!(feed.has_more());

        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::Loaded { appended: 1 });
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize + 1);
        assert!(!feed.has_more(), "short page means end of data");
    }

    #[tokio::test]
    async fn load_is_a_noop_at_end_of_data() {
        let store = ScriptedStore::new(vec![Ok(vec![job("only")])]);
        let mut feed = JobFeed::new(store);

        feed.load_next().await.unwrap();
        assert!(!feed.has_more());

        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::Loaded { appended: 0 });
        assert_eq!(feed.jobs().len(), 1);
    }

    #[test]
    fn only_one_request_may_be_in_flight() {
        let store = ScriptedStore::new(vec![]);
        let mut feed = JobFeed::new(store);

        let first = feed.begin_load();
        assert!(first.is_some());
        assert!(feed.begin_load().is_none());

        feed.apply_page(&first.unwrap(), Ok(Vec::new())).unwrap();
        assert!(!feed.is_loading());
    }

    #[test]
    fn stale_epoch_response_is_discarded() {
        let store = ScriptedStore::new(vec![]);
        let mut feed = JobFeed::new(store);

        let request = feed.begin_load().unwrap();

        let mut narrowed = JobFilter::default();
        narrowed.search_query = "tax".to_string();
        feed.set_filter(narrowed);

        let outcome = feed
            .apply_page(&request, Ok(full_page("old")))
            .unwrap();
        assert_eq!(outcome, FeedOutcome::Stale);
        assert!(feed.jobs().is_empty(), "stale rows must not leak in");

        // The new epoch can still issue its own request.
        let fresh = feed.begin_load().unwrap();
        assert_eq!(fresh.epoch, feed.epoch());
        assert_eq!(fresh.window.page, 0);
    }

    #[test]
    fn filter_change_rewinds_to_page_zero() {
        let store = ScriptedStore::new(vec![]);
        let mut feed = JobFeed::new(store);

        let req = feed.begin_load().unwrap();
        feed.apply_page(&req, Ok(full_page("p0"))).unwrap();
        let req = feed.begin_load().unwrap();
        assert_eq!(req.window.page, 1);
        feed.apply_page(&req, Ok(full_page("p1"))).unwrap();

        let mut filter = JobFilter::default();
        filter.location = "cork".to_string();
        feed.set_filter(filter);

        let req = feed.begin_load().unwrap();
        assert_eq!(req.window.page, 0);
        // Old rows remain visible until the new first page lands.
        assert_eq!(feed.jobs().len(), 2 * PAGE_SIZE as usize);
        feed.apply_page(&req, Ok(vec![job("cork-0")])).unwrap();
        assert_eq!(feed.jobs().len(), 1);
    }

    #[test]
    fn identical_filter_does_not_start_a_new_epoch() {
        let store = ScriptedStore::new(vec![]);
        let mut feed = JobFeed::new(store);
        let epoch = feed.epoch();
        feed.set_filter(JobFilter::default());
        assert_eq!(feed.epoch(), epoch);
    }

    #[tokio::test]
    async fn known_total_skips_the_fetch_past_the_end() {
        // Exactly one full page of matches: the first page fills, and a
        // second fetch would start at the total.
        let store = ScriptedStore::with_total(vec![Ok(full_page("a"))], PAGE_SIZE);
        let mut feed = JobFeed::new(store);

        feed.load_next().await.unwrap();
        assert_eq!(feed.total_count(), Some(PAGE_SIZE));
        assert!(feed.has_more(), "a full page alone does not prove the end");

        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::Loaded { appended: 0 });
        assert!(!feed.has_more());
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize);
    }

    #[tokio::test]
    async fn range_exceeded_means_end_of_data() {
        let store = ScriptedStore::new(vec![
            Ok(full_page("a")),
            Err(AppError::range_exceeded("Requested window lies past the end")),
        ]);
        let mut feed = JobFeed::new(store);

        feed.load_next().await.unwrap();
        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::EndOfData);
        assert!(!feed.has_more());
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize, "rows are kept");
    }

    #[tokio::test]
    async fn fetch_error_leaves_feed_intact_and_retryable() {
        let store = ScriptedStore::new(vec![
            Ok(full_page("a")),
            Err(AppError::database("connection reset")),
            Ok(full_page("b")),
        ]);
        let mut feed = JobFeed::new(store);

        feed.load_next().await.unwrap();
        let err = feed.load_next().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize);
        assert!(feed.has_more());
        assert!(!feed.is_loading(), "a failed fetch must not wedge the feed");

        let outcome = feed.load_next().await.unwrap();
        assert_eq!(outcome, FeedOutcome::Loaded { appended: PAGE_SIZE as usize });
        assert_eq!(feed.jobs().len(), 2 * PAGE_SIZE as usize);
    }

    #[tokio::test]
    async fn refresh_replaces_from_page_zero() {
        let store = ScriptedStore::new(vec![Ok(full_page("a")), Ok(full_page("fresh"))]);
        let mut feed = JobFeed::new(store);

        feed.load_next().await.unwrap();
        let epoch = feed.epoch();
        feed.refresh();
        assert_eq!(feed.epoch(), epoch + 1);

        feed.load_next().await.unwrap();
        assert_eq!(feed.jobs().len(), PAGE_SIZE as usize);
        assert_eq!(feed.jobs()[0].title, "fresh-0");
    }
}
