//! Saved job bookmarks.

pub mod service;
pub mod store;

pub use service::{SaveOutcome, SavedJobService};
pub use store::SavedJobStore;
