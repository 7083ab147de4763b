//! Criteria layer core types.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Equal => write!(f, "="),
            ComparisonOp::NotEqual => write!(f, "!="),
            ComparisonOp::GreaterThan => write!(f, ">"),
            ComparisonOp::GreaterThanOrEqual => write!(f, ">="),
            ComparisonOp::LessThan => write!(f, "<"),
            ComparisonOp::LessThanOrEqual => write!(f, "<="),
        }
    }
}

/// Join types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
        }
    }
}

/// One boolean condition, as an explicit expression tree.
///
/// Nodes are only assembled through
/// [`CriteriaBuilder`](super::CriteriaBuilder); rendering to SQL happens in
/// [`SelectQuery`](super::SelectQuery). Columns are stored fully qualified
/// (`table.column`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// `column <op> $value`
    Compare {
        column: String,
        op: ComparisonOp,
        value: Value,
    },
    /// `column BETWEEN $lower AND $upper`, inclusive on both bounds.
    Between {
        column: String,
        lower: Value,
        upper: Value,
    },
    /// `column [NOT] LIKE $pattern`
    Like {
        column: String,
        pattern: String,
        negated: bool,
    },
    /// `column [NOT] IN ($values...)`
    In {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },
    /// `column IS [NOT] NULL`
    Null { column: String, negated: bool },
    /// Collection column is [not] empty.
    Empty { column: String, negated: bool },
    /// `$value` is [not] a member of the collection column. Against an
    /// empty collection, membership is false and non-membership is true.
    Member {
        column: String,
        value: Value,
        negated: bool,
    },
    /// Conjunction of the children; vacuously true when empty.
    And(Vec<Predicate>),
    /// Disjunction of the children; vacuously false when empty.
    Or(Vec<Predicate>),
}

/// Join clause recorded while a specification resolves against a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: &'static str,
    /// `(left, right)` of the `ON left = right` condition, both qualified.
    pub on: (String, String),
}

/// Fetch (eager-load) clause: a join whose table is also selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchClause {
    pub join_type: JoinType,
    pub table: &'static str,
    pub on: (String, String),
}
