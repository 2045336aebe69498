//! Predicate types for dynamic query building.

use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// SQL `ILIKE` case-insensitive pattern match.
    ILike,
    /// SQL `IS NULL` check.
    IsNull,
}

/// A dynamic filter value that can represent the SQL types we bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// Null / no value (for `IS NULL`).
    Null,
}

/// A single filter condition on a named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The column name to filter on.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Shorthand for an equality filter on a string column.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::String(value.into()))
    }

    /// Shorthand for a case-insensitive LIKE filter.
    pub fn ilike(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(field, FilterOp::ILike, FilterValue::String(pattern.into()))
    }

    /// Shorthand for a `>=` filter on an integer column.
    pub fn gte(field: impl Into<String>, value: i64) -> Self {
        Self::new(field, FilterOp::Gte, FilterValue::Integer(value))
    }

    /// Shorthand for a `<=` filter on an integer column.
    pub fn lte(field: impl Into<String>, value: i64) -> Self {
        Self::new(field, FilterOp::Lte, FilterValue::Integer(value))
    }

    /// Shorthand for an `IS NULL` filter.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, FilterOp::IsNull, FilterValue::Null)
    }
}

/// A group of predicates combined as `(b1) OR (b2) OR ...`, where each
/// branch is itself an AND of its fields.
///
/// Groups are AND-combined with each other at the query level. A plain
/// single-column predicate is a group with one branch holding one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicateGroup {
    /// OR-combined branches; each branch AND-combines its fields.
    pub branches: Vec<Vec<FilterField>>,
}

impl PredicateGroup {
    /// A group with a single predicate.
    pub fn single(field: FilterField) -> Self {
        Self {
            branches: vec![vec![field]],
        }
    }

    /// A group OR-combining single-field branches.
    pub fn any(fields: Vec<FilterField>) -> Self {
        Self {
            branches: fields.into_iter().map(|f| vec![f]).collect(),
        }
    }

    /// A group from explicit branches.
    pub fn branches(branches: Vec<Vec<FilterField>>) -> Self {
        Self { branches }
    }
}
