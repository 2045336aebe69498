//! Job listing entities.

pub mod experience;
pub mod model;

pub use experience::ExperienceLevel;
pub use model::{CreateJob, Job};
