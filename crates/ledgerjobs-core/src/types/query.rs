//! Job filter state and the query builder.
//!
//! [`JobFilter`] is the immutable snapshot of all active search criteria.
//! [`JobQuery::build`] turns it into a declarative query description
//! (predicate groups + sort order + page window); rendering that
//! description to SQL lives in the database crate. Building is a pure,
//! total function: the same filter always yields a structurally identical
//! query.

use serde::{Deserialize, Serialize};

use super::filter::{FilterField, PredicateGroup};
use super::pagination::PageWindow;
use super::sorting::{NullPlacement, SortField};

/// Default minimum salary filter, in thousands of euro.
pub const DEFAULT_MIN_SALARY: u32 = 30;
/// Default maximum salary filter, in thousands of euro.
pub const DEFAULT_MAX_SALARY: u32 = 200;
/// Sentinel routine value meaning "no routine filter".
pub const ROUTINE_ALL: &str = "all";

/// The active search/filter criteria.
///
/// Replaced wholesale on any change, never mutated in place. Every field
/// always has a value; the empty string (or the defaults) is the "unset"
/// sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    /// Free-text query matched against title, company, description, and
    /// location (case-insensitive substring).
    #[serde(default)]
    pub search_query: String,
    /// Minimum salary in thousands of euro.
    #[serde(default = "default_min_salary")]
    pub min_salary: u32,
    /// Maximum salary in thousands of euro, if bounded.
    #[serde(default = "default_max_salary")]
    pub max_salary: Option<u32>,
    /// When true, records with no salary data satisfy the salary predicate
    /// regardless of bounds.
    #[serde(default)]
    pub include_missing_salary: bool,
    /// Experience bracket (`entry`, `mid`, `senior`, `director`) or empty.
    #[serde(default)]
    pub experience: String,
    /// Region category (e.g. `dublin`, `cork`, `remote`) or empty.
    #[serde(default)]
    pub location: String,
    /// Free-form city match, or empty.
    #[serde(default)]
    pub city: String,
    /// Work routine (`remote`, `hybrid`, `office`), empty or `"all"`.
    #[serde(default)]
    pub routine: String,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            min_salary: DEFAULT_MIN_SALARY,
            max_salary: Some(DEFAULT_MAX_SALARY),
            include_missing_salary: false,
            experience: String::new(),
            location: String::new(),
            city: String::new(),
            routine: String::new(),
        }
    }
}

impl JobFilter {
    /// Whether the salary bounds deviate from the defaults (and therefore
    /// activate the salary predicate).
    pub fn salary_filter_active(&self) -> bool {
        self.min_salary > DEFAULT_MIN_SALARY
            || self.max_salary.is_some_and(|max| max < DEFAULT_MAX_SALARY)
    }

    /// Whether the routine field carries a real filter value.
    pub fn routine_filter_active(&self) -> bool {
        !self.routine.is_empty() && self.routine != ROUTINE_ALL
    }
}

fn default_min_salary() -> u32 {
    DEFAULT_MIN_SALARY
}

fn default_max_salary() -> Option<u32> {
    Some(DEFAULT_MAX_SALARY)
}

/// Whether a built query counts matches or fetches a page of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Count matching rows only.
    Count,
    /// Fetch one page of rows.
    Page(PageWindow),
}

/// A declarative query description over the jobs table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobQuery {
    /// AND-combined predicate groups.
    pub predicates: Vec<PredicateGroup>,
    /// Sort order (empty in count mode).
    pub sort: Vec<SortField>,
    /// Page window (absent in count mode).
    pub window: Option<PageWindow>,
}

impl JobQuery {
    /// Build a query description from the filter state.
    ///
    /// Pure and deterministic; cannot fail for any fully-populated filter.
    pub fn build(filter: &JobFilter, mode: QueryMode) -> Self {
        let mut predicates = Vec::new();

        if !filter.search_query.is_empty() {
            let pattern = format!("%{}%", filter.search_query);
            predicates.push(PredicateGroup::any(vec![
                FilterField::ilike("title", pattern.clone()),
                FilterField::ilike("company", pattern.clone()),
                FilterField::ilike("description", pattern.clone()),
                FilterField::ilike("location", pattern),
            ]));
        }

        if filter.salary_filter_active() {
            let mut bounded = vec![FilterField::gte(
                "salary_min",
                i64::from(filter.min_salary) * 1000,
            )];
            if let Some(max) = filter.max_salary {
                bounded.push(FilterField::lte("salary_min", i64::from(max) * 1000));
            }

            let branches = if filter.include_missing_salary {
                vec![
                    bounded,
                    vec![
                        FilterField::is_null("salary_min"),
                        FilterField::is_null("salary_max"),
                    ],
                ]
            } else {
                vec![bounded]
            };
            predicates.push(PredicateGroup::branches(branches));
        }

        if !filter.experience.is_empty() {
            predicates.push(PredicateGroup::single(FilterField::eq(
                "experience_level",
                filter.experience.clone(),
            )));
        }

        if !filter.location.is_empty() {
            predicates.push(PredicateGroup::single(FilterField::ilike(
                "location_category",
                filter.location.clone(),
            )));
        }

        if !filter.city.is_empty() {
            predicates.push(PredicateGroup::single(FilterField::ilike(
                "city",
                filter.city.clone(),
            )));
        }

        if filter.routine_filter_active() {
            predicates.push(PredicateGroup::single(FilterField::ilike(
                "routine",
                filter.routine.clone(),
            )));
        }

        match mode {
            QueryMode::Count => Self {
                predicates,
                sort: Vec::new(),
                window: None,
            },
            QueryMode::Page(window) => Self {
                predicates,
                sort: vec![
                    SortField::desc("posted_date").nulls(NullPlacement::Last),
                    SortField::asc("salary_range").nulls(NullPlacement::Last),
                    SortField::asc("min_experience"),
                ],
                window: Some(window),
            },
        }
    }
}
