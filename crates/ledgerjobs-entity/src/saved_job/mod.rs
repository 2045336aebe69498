//! Saved job entities.

pub mod model;

pub use model::{SavedJob, SavedJobView};
