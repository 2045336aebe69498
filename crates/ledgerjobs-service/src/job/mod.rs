//! Job search, feed orchestration, and paging.

pub mod feed;
pub mod pager;
pub mod search;
pub mod store;

pub use feed::{FeedOutcome, FeedRequest, JobFeed};
pub use pager::EndPager;
pub use search::JobSearchService;
pub use store::JobStore;
