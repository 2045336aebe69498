//! Job filter and page query parameters.

use serde::{Deserialize, Serialize};

use ledgerjobs_core::types::pagination::{PAGE_SIZE, PageWindow};
use ledgerjobs_core::types::query::{DEFAULT_MIN_SALARY, JobFilter};

/// Query parameters for the job search endpoint.
///
/// Every field is optional; omitted fields fall back to the cleared
/// filter state, so `GET /api/jobs` with no parameters returns the
/// default feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilterParams {
    /// Free-text search.
    pub search: Option<String>,
    /// Minimum salary in thousands of euro.
    pub min_salary: Option<u32>,
    /// Maximum salary in thousands of euro. Absent means the default
    /// cap; `max_salary=none` lifts the cap entirely.
    pub max_salary: Option<String>,
    /// Include jobs with no salary data.
    pub include_missing_salary: Option<bool>,
    /// Experience bracket.
    pub experience: Option<String>,
    /// Region category.
    pub location: Option<String>,
    /// City substring.
    pub city: Option<String>,
    /// Work routine.
    pub routine: Option<String>,
    /// Page number (0-based).
    pub page: Option<u64>,
    /// Page size (defaults to the feed page size, capped at 100).
    pub page_size: Option<u64>,
}

impl JobFilterParams {
    /// Splits the parameters into a domain filter and a page window.
    pub fn into_parts(self) -> (JobFilter, PageWindow) {
        let defaults = JobFilter::default();

        let max_salary = match self.max_salary.as_deref() {
            None => defaults.max_salary,
            Some("none") => None,
            Some(raw) => raw.parse().ok().or(defaults.max_salary),
        };

        let filter = JobFilter {
            search_query: self.search.unwrap_or_default(),
            min_salary: self.min_salary.unwrap_or(DEFAULT_MIN_SALARY),
            max_salary,
            include_missing_salary: self.include_missing_salary.unwrap_or(false),
            experience: self.experience.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            routine: self.routine.unwrap_or_default(),
        };

        let window = PageWindow::with_size(
            self.page.unwrap_or(0),
            self.page_size.unwrap_or(PAGE_SIZE),
        );

        (filter, window)
    }
}
