//! Store-agnostic query criteria.
//!
//! Filters are compiled into an ordered list of [`Clause`]s (implicitly AND-ed),
//! an optional [`TextMatch`] and a resolved [`SortSpec`]. The infrastructure layer
//! renders these into the document store's query language.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal compared against a stored field.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
}

impl From<bool> for ClauseValue {
    fn from(value: bool) -> Self {
        ClauseValue::Bool(value)
    }
}

impl From<i64> for ClauseValue {
    fn from(value: i64) -> Self {
        ClauseValue::Int(value)
    }
}

impl From<f64> for ClauseValue {
    fn from(value: f64) -> Self {
        ClauseValue::Float(value)
    }
}

impl From<DateTime<Utc>> for ClauseValue {
    fn from(value: DateTime<Utc>) -> Self {
        ClauseValue::DateTime(value)
    }
}

impl From<Uuid> for ClauseValue {
    fn from(value: Uuid) -> Self {
        ClauseValue::Uuid(value)
    }
}

/// Comparison between two fields of the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldComparison {
    LessThan,
    Equal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Eq {
        field: &'static str,
        value: ClauseValue,
    },
    Gt {
        field: &'static str,
        value: ClauseValue,
    },
    Gte {
        field: &'static str,
        value: ClauseValue,
    },
    Lte {
        field: &'static str,
        value: ClauseValue,
    },
    Between {
        field: &'static str,
        from: ClauseValue,
        to: ClauseValue,
    },
    /// Case-insensitive regular expression match. The pattern is already escaped.
    Pattern {
        field: &'static str,
        pattern: String,
    },
    In {
        field: &'static str,
        values: Vec<ClauseValue>,
    },
    CompareFields {
        left: &'static str,
        comparison: FieldComparison,
        right: &'static str,
    },
}

/// Builds a range clause from two optional bounds.
///
/// Both bounds give a closed interval, a single bound degrades to a one-sided
/// comparison and no bound yields no clause.
pub fn range<V>(field: &'static str, from: Option<V>, to: Option<V>) -> Option<Clause>
where
    V: Into<ClauseValue>,
{
    match (from, to) {
        (Some(from), Some(to)) => Some(Clause::Between {
            field,
            from: from.into(),
            to: to.into(),
        }),
        (Some(from), None) => Some(Clause::Gte {
            field,
            value: from.into(),
        }),
        (None, Some(to)) => Some(Clause::Lte {
            field,
            value: to.into(),
        }),
        (None, None) => None,
    }
}

/// Keeps the clauses whose condition held, preserving their order.
pub fn collect_clauses<I>(candidates: I) -> Vec<Clause>
where
    I: IntoIterator<Item = Option<Clause>>,
{
    candidates
        .into_iter()
        .fold(Vec::new(), |mut clauses, candidate| {
            if let Some(clause) = candidate {
                clauses.push(clause);
            }
            clauses
        })
}

/// Free-text search against the store's text index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub term: String,
}

impl TextMatch {
    /// Returns `None` for absent, empty or whitespace-only terms.
    pub fn from_term(term: Option<&str>) -> Option<Self> {
        term.map(str::trim)
            .filter(|term| !term.is_empty())
            .map(|term| TextMatch {
                term: term.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSpec {
    Field {
        property: &'static str,
        direction: SortDirection,
    },
    /// Descending text-search score.
    Relevance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub clauses: Vec<Clause>,
    pub text: Option<TextMatch>,
    pub sort: SortSpec,
}
