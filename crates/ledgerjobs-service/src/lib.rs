//! # ledgerjobs-service
//!
//! Business logic service layer for LedgerJobs. Each service orchestrates
//! repositories, storage providers, and outbound integrations to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod job;
pub mod newsletter;
pub mod saved;
pub mod talent;

pub use context::RequestContext;
pub use job::{EndPager, FeedOutcome, FeedRequest, JobFeed, JobSearchService, JobStore};
pub use newsletter::NewsletterService;
pub use saved::{SaveOutcome, SavedJobService, SavedJobStore};
pub use talent::TalentService;
