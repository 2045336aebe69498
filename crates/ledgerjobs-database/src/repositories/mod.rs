//! Repository implementations for all LedgerJobs entities.

pub mod job;
pub mod saved_job;
pub mod session;
pub mod talent;
pub mod user;

pub use job::JobRepository;
pub use saved_job::SavedJobRepository;
pub use session::SessionRepository;
pub use talent::TalentProfileRepository;
pub use user::UserRepository;
