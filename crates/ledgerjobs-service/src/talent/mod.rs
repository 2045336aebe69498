//! Talent network profiles and résumé uploads.

pub mod service;

pub use service::TalentService;
