//! SQL rendering for job query descriptions.
//!
//! Turns a [`JobQuery`] into a bound [`QueryBuilder`]. Column names come
//! from a fixed allowlist assembled by the query builder itself, never
//! from client input, so they are pushed as raw identifiers while every
//! comparison value is a bind parameter.

use sqlx::{Postgres, QueryBuilder};

use ledgerjobs_core::types::filter::{FilterField, FilterOp, FilterValue, PredicateGroup};
use ledgerjobs_core::types::query::JobQuery;

/// Render a query description as a `SELECT *` over the jobs table.
pub fn build_select(query: &JobQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM jobs");
    push_predicates(&mut qb, &query.predicates);

    if !query.sort.is_empty() {
        qb.push(" ORDER BY ");
        for (i, sort) in query.sort.iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            qb.push(sort.field.clone());
            qb.push(" ");
            qb.push(sort.direction.as_sql());
            if let Some(nulls) = sort.nulls {
                qb.push(" ");
                qb.push(nulls.as_sql());
            }
        }
    }

    if let Some(window) = query.window {
        qb.push(" LIMIT ");
        qb.push_bind(window.limit() as i64);
        qb.push(" OFFSET ");
        qb.push_bind(window.offset() as i64);
    }

    qb
}

/// Render a query description as a `COUNT(*)` over the jobs table.
///
/// Sort and window on the description are ignored; only the predicates
/// matter for counting.
pub fn build_count(query: &JobQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM jobs");
    push_predicates(&mut qb, &query.predicates);
    qb
}

fn push_predicates(qb: &mut QueryBuilder<'static, Postgres>, groups: &[PredicateGroup]) {
    if groups.is_empty() {
        return;
    }
    qb.push(" WHERE ");
    for (gi, group) in groups.iter().enumerate() {
        if gi > 0 {
            qb.push(" AND ");
        }
        qb.push("(");
        for (bi, branch) in group.branches.iter().enumerate() {
            if bi > 0 {
                qb.push(" OR ");
            }
            qb.push("(");
            for (fi, field) in branch.iter().enumerate() {
                if fi > 0 {
                    qb.push(" AND ");
                }
                push_field(qb, field);
            }
            qb.push(")");
        }
        qb.push(")");
    }
}

fn push_field(qb: &mut QueryBuilder<'static, Postgres>, field: &FilterField) {
    qb.push(field.field.clone());
    let op = match field.op {
        FilterOp::Eq => " = ",
        FilterOp::Gte => " >= ",
        FilterOp::Lte => " <= ",
        FilterOp::ILike => " ILIKE ",
        FilterOp::IsNull => {
            qb.push(" IS NULL");
            return;
        }
    };
    qb.push(op);
    match &field.value {
        FilterValue::String(s) => {
            qb.push_bind(s.clone());
        }
        FilterValue::Integer(i) => {
            qb.push_bind(*i);
        }
        FilterValue::Null => {
            qb.push("NULL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerjobs_core::types::pagination::PageWindow;
    use ledgerjobs_core::types::query::{JobFilter, QueryMode};

    #[test]
    fn default_filter_renders_bare_select() {
        let query = JobQuery::build(&JobFilter::default(), QueryMode::Count);
        assert_eq!(build_count(&query).sql(), "SELECT COUNT(*) FROM jobs");
    }

    #[test]
    fn page_query_renders_sort_and_window() {
        let query = JobQuery::build(&JobFilter::default(), QueryMode::Page(PageWindow::new(1)));
        assert_eq!(
            build_select(&query).sql(),
            "SELECT * FROM jobs ORDER BY posted_date DESC NULLS LAST, \
             salary_range ASC NULLS LAST, min_experience ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn search_renders_four_way_or() {
        let filter = JobFilter {
            search_query: "tax".to_string(),
            ..JobFilter::default()
        };
        let query = JobQuery::build(&filter, QueryMode::Count);
        assert_eq!(
            build_count(&query).sql(),
            "SELECT COUNT(*) FROM jobs WHERE ((title ILIKE $1) OR (company ILIKE $2) \
             OR (description ILIKE $3) OR (location ILIKE $4))"
        );
    }

    #[test]
    fn missing_salary_branch_renders_null_checks() {
        let filter = JobFilter {
            min_salary: 80,
            include_missing_salary: true,
            ..JobFilter::default()
        };
        let query = JobQuery::build(&filter, QueryMode::Count);
        assert_eq!(
            build_count(&query).sql(),
            "SELECT COUNT(*) FROM jobs WHERE ((salary_min >= $1 AND salary_min <= $2) \
             OR (salary_min IS NULL AND salary_max IS NULL))"
        );
    }

    #[test]
    fn groups_are_and_combined() {
        let filter = JobFilter {
            experience: "senior".to_string(),
            location: "dublin".to_string(),
            ..JobFilter::default()
        };
        let query = JobQuery::build(&filter, QueryMode::Count);
        assert_eq!(
            build_count(&query).sql(),
            "SELECT COUNT(*) FROM jobs WHERE ((experience_level = $1)) \
             AND ((location_category ILIKE $2))"
        );
    }
}
