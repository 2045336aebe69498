//! Job listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published job listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique listing identifier.
    pub id: Uuid,
    /// Role title.
    pub title: String,
    /// Hiring firm or practice.
    pub company: String,
    /// Full listing description.
    pub description: String,
    /// Free-text location as advertised.
    pub location: String,
    /// Normalised region category (e.g. `dublin`, `remote`).
    pub location_category: Option<String>,
    /// City, when one can be extracted from the location.
    pub city: Option<String>,
    /// Work routine (`remote`, `hybrid`, `office`).
    pub routine: Option<String>,
    /// Contract type (permanent, fixed-term, ...).
    pub employment_type: Option<String>,
    /// Experience bracket (entry, mid, senior, director).
    pub experience_level: Option<String>,
    /// Minimum years of experience required.
    pub min_experience: Option<i32>,
    /// Lower salary bound in euro per year.
    pub salary_min: Option<i32>,
    /// Upper salary bound in euro per year.
    pub salary_max: Option<i32>,
    /// Display-ready salary text from the original posting.
    pub salary_range: Option<String>,
    /// Notable perks text.
    pub perks: Option<String>,
    /// Link to the original posting.
    pub job_url: String,
    /// When the listing was posted (absent when unknown).
    pub posted_date: Option<DateTime<Utc>>,
    /// Application deadline, if advertised.
    pub closing_date: Option<DateTime<Utc>>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Display-ready salary text.
    ///
    /// Prefers the posting's own range text, then derives one from the
    /// numeric bounds, and falls back to "Negotiable" when the listing
    /// carries no salary data at all.
    pub fn salary_display(&self) -> String {
        if let Some(range) = &self.salary_range {
            if !range.is_empty() {
                return range.clone();
            }
        }
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => format!("\u{20ac}{}k - \u{20ac}{}k", min / 1000, max / 1000),
            (Some(min), None) => format!("\u{20ac}{}k+", min / 1000),
            (None, Some(max)) => format!("Up to \u{20ac}{}k", max / 1000),
            (None, None) => "Negotiable".to_string(),
        }
    }

    /// Whether the listing is past its advertised closing date.
    pub fn is_closed(&self) -> bool {
        self.closing_date.is_some_and(|d| d <= Utc::now())
    }
}

/// Data required to create a new listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Role title.
    pub title: String,
    /// Hiring firm or practice.
    pub company: String,
    /// Full listing description.
    pub description: String,
    /// Free-text location.
    pub location: String,
    /// Normalised region category.
    pub location_category: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Work routine.
    pub routine: Option<String>,
    /// Contract type.
    pub employment_type: Option<String>,
    /// Experience bracket.
    pub experience_level: Option<String>,
    /// Minimum years of experience.
    pub min_experience: Option<i32>,
    /// Lower salary bound in euro per year.
    pub salary_min: Option<i32>,
    /// Upper salary bound in euro per year.
    pub salary_max: Option<i32>,
    /// Display-ready salary text.
    pub salary_range: Option<String>,
    /// Notable perks text.
    pub perks: Option<String>,
    /// Link to the original posting.
    pub job_url: String,
    /// When the listing was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Application deadline.
    pub closing_date: Option<DateTime<Utc>>,
}
