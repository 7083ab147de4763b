//! `SELECT` rendering for composed specifications.
//!
//! Renders the predicate tree to SQL with `$n` placeholders plus a bind
//! list, or with inline literals for logging and tests. Execution is out
//! of scope; the rendered pair is the hand-off point to the host.

use serde_json::Value;

use crate::schema::Entity;
use crate::specification::Specification;

use super::builder::CriteriaBuilder;
use super::path::Root;
use super::types::{FetchClause, JoinClause, Predicate};

/// A `SELECT` over `E`'s table, filtered by one composed specification.
pub struct SelectQuery<E: Entity> {
    where_predicate: Option<Predicate>,
    joins: Vec<JoinClause>,
    fetches: Vec<FetchClause>,
    _marker: std::marker::PhantomData<fn(E)>,
}

impl<E: Entity> SelectQuery<E> {
    pub fn new() -> Self {
        Self {
            where_predicate: None,
            joins: Vec::new(),
            fetches: Vec::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Applies `spec` against a fresh root, recording any joins or fetches
    /// it performs. Repeated calls AND the filters together.
    pub fn filter(mut self, spec: impl Into<Specification<E>>) -> Self
    where
        E: 'static,
    {
        let root = Root::new();
        let criteria_builder = CriteriaBuilder::new();
        let predicate = spec.into().to_predicate(&root, &criteria_builder);
        self.joins.extend(root.take_joins());
        self.fetches.extend(root.take_fetches());
        self.where_predicate = Some(match self.where_predicate.take() {
            Some(existing) => criteria_builder.conjunction(existing, predicate),
            None => predicate,
        });
        self
    }

    /// The composed `WHERE` predicate, if any filter was applied.
    pub fn predicate(&self) -> Option<&Predicate> {
        self.where_predicate.as_ref()
    }

    pub fn fetches(&self) -> &[FetchClause] {
        &self.fetches
    }

    /// The join clauses that will actually be rendered: fetches first (a
    /// fetch is a join whose table is also selected), then explicit joins
    /// that do not duplicate a fetch of the same table and condition. The
    /// fetch-then-join sequencing of the fetch-join DSL would otherwise
    /// emit the same join twice.
    pub fn effective_joins(&self) -> Vec<JoinClause> {
        let mut joins: Vec<JoinClause> = self
            .fetches
            .iter()
            .map(|fetch| JoinClause {
                join_type: fetch.join_type,
                table: fetch.table,
                on: fetch.on.clone(),
            })
            .collect();
        for join in &self.joins {
            let duplicate = joins
                .iter()
                .any(|existing| existing.table == join.table && existing.on == join.on);
            if !duplicate {
                joins.push(join.clone());
            }
        }
        joins
    }

    /// Renders the query with `$n` placeholders, returning the SQL and the
    /// bind values in placeholder order.
    pub fn to_sql_with_params(&self) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let mut param_counter = 1usize;
        let sql = self.render(&mut |value| {
            params.push(value);
            let placeholder = format!("${}", param_counter);
            param_counter += 1;
            placeholder
        });

        tracing::debug!(
            "Generated SELECT SQL: {} ({} params)",
            sql,
            params.len()
        );
        (sql, params)
    }

    /// Renders the query with inline literals.
    pub fn to_sql(&self) -> String {
        self.render(&mut |value| format_value(&value))
    }

    /// Renders the query in one tree walk; `bind` turns each operand into
    /// its SQL token (a placeholder or an inline literal).
    fn render(&self, bind: &mut dyn FnMut(Value) -> String) -> String {
        let mut sql = String::new();

        sql.push_str("SELECT ");
        sql.push_str(E::TABLE);
        sql.push_str(".*");
        for fetch in &self.fetches {
            sql.push_str(", ");
            sql.push_str(fetch.table);
            sql.push_str(".*");
        }

        sql.push_str(" FROM ");
        sql.push_str(E::TABLE);

        for join in self.effective_joins() {
            sql.push(' ');
            sql.push_str(&join.join_type.to_string());
            sql.push(' ');
            sql.push_str(join.table);
            sql.push_str(" ON ");
            sql.push_str(&join.on.0);
            sql.push_str(" = ");
            sql.push_str(&join.on.1);
        }

        if let Some(predicate) = &self.where_predicate {
            sql.push_str(" WHERE ");
            render_predicate(predicate, &mut sql, bind);
        }

        sql
    }
}

impl<E: Entity> Default for SelectQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn render_predicate(
    predicate: &Predicate,
    sql: &mut String,
    bind: &mut dyn FnMut(Value) -> String,
) {
    match predicate {
        Predicate::Compare { column, op, value } => {
            sql.push_str(column);
            sql.push(' ');
            sql.push_str(&op.to_string());
            sql.push(' ');
            sql.push_str(&bind(value.clone()));
        }
        Predicate::Between {
            column,
            lower,
            upper,
        } => {
            sql.push_str(column);
            sql.push_str(" BETWEEN ");
            sql.push_str(&bind(lower.clone()));
            sql.push_str(" AND ");
            sql.push_str(&bind(upper.clone()));
        }
        Predicate::Like {
            column,
            pattern,
            negated,
        } => {
            sql.push_str(column);
            sql.push_str(if *negated { " NOT LIKE " } else { " LIKE " });
            sql.push_str(&bind(Value::String(pattern.clone())));
        }
        Predicate::In {
            column,
            values,
            negated,
        } => {
            // An empty IN list is not valid SQL; it degenerates to a
            // constant matching no row (or every row when negated).
            if values.is_empty() {
                sql.push_str(if *negated { "TRUE" } else { "FALSE" });
                return;
            }
            sql.push_str(column);
            sql.push_str(if *negated { " NOT IN (" } else { " IN (" });
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(&bind(value.clone()));
            }
            sql.push(')');
        }
        Predicate::Null { column, negated } => {
            sql.push_str(column);
            sql.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
        }
        Predicate::Empty { column, negated } => {
            sql.push_str("cardinality(");
            sql.push_str(column);
            sql.push_str(if *negated { ") <> 0" } else { ") = 0" });
        }
        Predicate::Member {
            column,
            value,
            negated,
        } => {
            // ANY/ALL over an array column: membership in an empty array
            // is false, non-membership true, matching collection
            // predicate semantics.
            sql.push_str(&bind(value.clone()));
            sql.push_str(if *negated { " <> ALL(" } else { " = ANY(" });
            sql.push_str(column);
            sql.push(')');
        }
        Predicate::And(children) => {
            if children.is_empty() {
                sql.push_str("TRUE");
                return;
            }
            sql.push('(');
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    sql.push_str(" AND ");
                }
                render_predicate(child, sql, bind);
            }
            sql.push(')');
        }
        Predicate::Or(children) => {
            if children.is_empty() {
                sql.push_str("FALSE");
                return;
            }
            sql.push('(');
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    sql.push_str(" OR ");
                }
                render_predicate(child, sql, bind);
            }
            sql.push(')');
        }
    }
}

/// Formats a bind value as a SQL literal.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => format!("'{}'", text.replace('\'', "''")),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string().to_uppercase(),
        Value::Null => "NULL".to_string(),
        other => format!("'{}'", other.to_string().replace('\'', "''")),
    }
}
