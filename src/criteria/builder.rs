//! The predicate factory: one constructor per predicate shape, plus the
//! boolean connectives.

use serde_json::Value;

use super::types::{ComparisonOp, Predicate};

/// Stateless factory for [`Predicate`] nodes.
///
/// Takes already-resolved (qualified) columns and already-converted
/// operands; resolution lives on [`Path`](super::Path) and conversion in
/// [`IntoOperand`](crate::value::IntoOperand).
#[derive(Debug, Clone, Copy, Default)]
pub struct CriteriaBuilder;

impl CriteriaBuilder {
    pub fn new() -> Self {
        Self
    }

    fn compare(&self, column: String, op: ComparisonOp, value: Value) -> Predicate {
        Predicate::Compare { column, op, value }
    }

    pub fn equal(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::Equal, value)
    }

    pub fn not_equal(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::NotEqual, value)
    }

    pub fn greater_than(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::GreaterThan, value)
    }

    pub fn greater_than_or_equal_to(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::GreaterThanOrEqual, value)
    }

    pub fn less_than(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::LessThan, value)
    }

    pub fn less_than_or_equal_to(&self, column: String, value: Value) -> Predicate {
        self.compare(column, ComparisonOp::LessThanOrEqual, value)
    }

    /// Inclusive on both bounds.
    pub fn between(&self, column: String, lower: Value, upper: Value) -> Predicate {
        Predicate::Between { column, lower, upper }
    }

    pub fn like(&self, column: String, pattern: String) -> Predicate {
        Predicate::Like {
            column,
            pattern,
            negated: false,
        }
    }

    pub fn not_like(&self, column: String, pattern: String) -> Predicate {
        Predicate::Like {
            column,
            pattern,
            negated: true,
        }
    }

    pub fn is_in(&self, column: String, values: Vec<Value>) -> Predicate {
        Predicate::In {
            column,
            values,
            negated: false,
        }
    }

    pub fn not_in(&self, column: String, values: Vec<Value>) -> Predicate {
        Predicate::In {
            column,
            values,
            negated: true,
        }
    }

    pub fn is_null(&self, column: String) -> Predicate {
        Predicate::Null {
            column,
            negated: false,
        }
    }

    pub fn is_not_null(&self, column: String) -> Predicate {
        Predicate::Null {
            column,
            negated: true,
        }
    }

    pub fn is_true(&self, column: String) -> Predicate {
        self.equal(column, Value::Bool(true))
    }

    pub fn is_false(&self, column: String) -> Predicate {
        self.equal(column, Value::Bool(false))
    }

    pub fn is_empty(&self, column: String) -> Predicate {
        Predicate::Empty {
            column,
            negated: false,
        }
    }

    pub fn is_not_empty(&self, column: String) -> Predicate {
        Predicate::Empty {
            column,
            negated: true,
        }
    }

    pub fn is_member(&self, value: Value, column: String) -> Predicate {
        Predicate::Member {
            column,
            value,
            negated: false,
        }
    }

    pub fn is_not_member(&self, value: Value, column: String) -> Predicate {
        Predicate::Member {
            column,
            value,
            negated: true,
        }
    }

    /// ANDs two predicates, flattening nested conjunctions.
    pub fn conjunction(&self, left: Predicate, right: Predicate) -> Predicate {
        match (left, right) {
            (Predicate::And(mut children), Predicate::And(more)) => {
                children.extend(more);
                Predicate::And(children)
            }
            (Predicate::And(mut children), right) => {
                children.push(right);
                Predicate::And(children)
            }
            (left, Predicate::And(children)) => {
                let mut all = Vec::with_capacity(children.len() + 1);
                all.push(left);
                all.extend(children);
                Predicate::And(all)
            }
            (left, right) => Predicate::And(vec![left, right]),
        }
    }

    /// ORs two predicates, flattening nested disjunctions.
    pub fn disjunction(&self, left: Predicate, right: Predicate) -> Predicate {
        match (left, right) {
            (Predicate::Or(mut children), Predicate::Or(more)) => {
                children.extend(more);
                Predicate::Or(children)
            }
            (Predicate::Or(mut children), right) => {
                children.push(right);
                Predicate::Or(children)
            }
            (left, Predicate::Or(children)) => {
                let mut all = Vec::with_capacity(children.len() + 1);
                all.push(left);
                all.extend(children);
                Predicate::Or(all)
            }
            (left, right) => Predicate::Or(vec![left, right]),
        }
    }

    /// ANDs a whole list; an empty list yields a vacuously true predicate.
    pub fn and_all(&self, predicates: Vec<Predicate>) -> Predicate {
        match predicates.len() {
            1 => predicates.into_iter().next().unwrap_or(Predicate::And(Vec::new())),
            _ => Predicate::And(predicates),
        }
    }
}
