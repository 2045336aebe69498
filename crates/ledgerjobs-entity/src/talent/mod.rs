//! Talent network entities.

pub mod model;

pub use model::{TalentProfile, UpsertTalentProfile};
