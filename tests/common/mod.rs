//! Shared test harness: seeded in-memory tables plus a predicate
//! evaluator with SQL comparison semantics, standing in for a relational
//! backing store.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;

use regex::Regex;
use serde_json::{json, Map, Value};
use sqlspec::{Entity, JoinType, Predicate, SelectQuery};

pub type Row = Map<String, Value>;

pub struct Persona;
pub struct Post;
pub struct Comment;
pub struct User;

sqlspec::entity! {
    Persona => "personas" {
        ID: i64 => "id",
        NAME: String => "name",
        LAST_NAME: Option<String> => "last_name",
        AGE: i32 => "age",
        USER_NAME: String => "user_name",
        FIRST_LOGIN: bool => "first_login",
        IS_MAGIC: Option<bool> => "is_magic",
    }
    associations {
        POSTS("posts"): many Post => ("id", "persona_id"),
    }
}

sqlspec::entity! {
    Post => "posts" {
        ID: i64 => "id",
        TITLE: String => "title",
        CONTENT: String => "content",
        PERSONA_ID: i64 => "persona_id",
        TAGS: Vec<String> => "tags",
    }
    associations {
        PERSONA("persona"): one Persona => ("persona_id", "id"),
        COMMENTS("comments"): many Comment => ("id", "post_id"),
    }
}

sqlspec::entity! {
    Comment => "comments" {
        ID: i64 => "id",
        CONTENT: String => "content",
        POST_ID: i64 => "post_id",
        USER_ID: i64 => "user_id",
    }
    associations {
        USER("user"): one User => ("user_id", "id"),
    }
}

sqlspec::entity! {
    User => "users" {
        ID: i64 => "id",
        NAME: String => "name",
        LAST_NAME: String => "last_name",
        AGE: i32 => "age",
        USER_NAME: String => "user_name",
    }
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("row fixtures must be objects, got {:?}", other),
    }
}

/// In-memory tables keyed by table name; rows carry qualified columns.
pub struct Database {
    tables: HashMap<&'static str, Vec<Row>>,
}

impl Database {
    /// The standard seed shared by the suites:
    ///
    /// - personas 1..3 with ages 20/30/40, a mixed-null `last_name`
    ///   column, and names where only the first two match `John%`;
    /// - posts 1..3 owned by personas 1 and 2 (persona 3 has none), plus
    ///   an orphan post 4 pointing at a persona that does not exist;
    /// - users and comments mirroring the post authorship.
    pub fn seeded() -> Self {
        let mut tables: HashMap<&'static str, Vec<Row>> = HashMap::new();
        tables.insert(
            "personas",
            vec![
                row(json!({
                    "personas.id": 1,
                    "personas.name": "John Smith",
                    "personas.last_name": "Smith",
                    "personas.age": 20,
                    "personas.user_name": "jsmith",
                    "personas.first_login": true,
                    "personas.is_magic": true,
                })),
                row(json!({
                    "personas.id": 2,
                    "personas.name": "Johnny Walker",
                    "personas.last_name": null,
                    "personas.age": 30,
                    "personas.user_name": "jwalker",
                    "personas.first_login": false,
                    "personas.is_magic": null,
                })),
                row(json!({
                    "personas.id": 3,
                    "personas.name": "Mary Poppins",
                    "personas.last_name": "Poppins",
                    "personas.age": 40,
                    "personas.user_name": "mpoppins",
                    "personas.first_login": false,
                    "personas.is_magic": false,
                })),
            ],
        );
        tables.insert(
            "posts",
            vec![
                row(json!({
                    "posts.id": 1,
                    "posts.title": "First",
                    "posts.content": "first post",
                    "posts.persona_id": 1,
                    "posts.tags": ["rust", "sql"],
                })),
                row(json!({
                    "posts.id": 2,
                    "posts.title": "Second",
                    "posts.content": "second post",
                    "posts.persona_id": 1,
                    "posts.tags": ["java", "spring"],
                })),
                row(json!({
                    "posts.id": 3,
                    "posts.title": "Third",
                    "posts.content": "third post",
                    "posts.persona_id": 2,
                    "posts.tags": [],
                })),
                row(json!({
                    "posts.id": 4,
                    "posts.title": "Orphan",
                    "posts.content": "no owner",
                    "posts.persona_id": 99,
                    "posts.tags": [],
                })),
            ],
        );
        tables.insert(
            "users",
            vec![
                row(json!({
                    "users.id": 1,
                    "users.name": "Ann",
                    "users.last_name": "Prentice",
                    "users.age": 25,
                    "users.user_name": "aprentice",
                })),
                row(json!({
                    "users.id": 2,
                    "users.name": "Bob",
                    "users.last_name": "Kowalski",
                    "users.age": 35,
                    "users.user_name": "bkowalski",
                })),
            ],
        );
        tables.insert(
            "comments",
            vec![
                row(json!({
                    "comments.id": 1,
                    "comments.content": "nice",
                    "comments.post_id": 1,
                    "comments.user_id": 1,
                })),
                row(json!({
                    "comments.id": 2,
                    "comments.content": "agreed",
                    "comments.post_id": 1,
                    "comments.user_id": 2,
                })),
                row(json!({
                    "comments.id": 3,
                    "comments.content": "hm",
                    "comments.post_id": 3,
                    "comments.user_id": 1,
                })),
            ],
        );
        Self { tables }
    }

    /// Runs the query: applies its effective joins, then filters by its
    /// predicate. Returned rows are the combined (joined) rows.
    pub fn select_rows<E: Entity>(&self, query: &SelectQuery<E>) -> Vec<Row> {
        let mut rows: Vec<Row> = self.tables.get(E::TABLE).cloned().unwrap_or_default();

        for join in query.effective_joins() {
            let right_rows: Vec<Row> = self.tables.get(join.table).cloned().unwrap_or_default();
            let (left_key, right_key) = (&join.on.0, &join.on.1);
            let mut joined = Vec::new();
            let mut matched_right = vec![false; right_rows.len()];

            for left in &rows {
                let mut matched = false;
                for (right_index, right) in right_rows.iter().enumerate() {
                    let left_value = left.get(left_key.as_str());
                    let right_value = right.get(right_key.as_str());
                    if let (Some(lv), Some(rv)) = (left_value, right_value) {
                        if !lv.is_null() && !rv.is_null() && values_equal(lv, rv) {
                            let mut combined = left.clone();
                            combined.extend(right.clone());
                            joined.push(combined);
                            matched = true;
                            matched_right[right_index] = true;
                        }
                    }
                }
                if !matched && join.join_type == JoinType::Left {
                    joined.push(left.clone());
                }
            }

            if join.join_type == JoinType::Right {
                for (right_index, right) in right_rows.iter().enumerate() {
                    if !matched_right[right_index] {
                        joined.push(right.clone());
                    }
                }
            }

            rows = joined;
        }

        if let Some(predicate) = query.predicate() {
            rows.retain(|candidate| eval(predicate, candidate));
        }
        rows
    }

    /// Distinct ids of `E`'s table among the matching rows, in row order.
    /// Rows where the id is null (unmatched outer-join sides) are skipped.
    pub fn select_ids<E: Entity>(&self, query: &SelectQuery<E>) -> Vec<i64> {
        let id_column = format!("{}.id", E::TABLE);
        let mut ids = Vec::new();
        for candidate in self.select_rows(query) {
            if let Some(id) = candidate.get(&id_column).and_then(Value::as_i64) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

/// Evaluates a predicate tree against one row, with SQL-style null
/// semantics: comparisons against NULL never match.
pub fn eval(predicate: &Predicate, row: &Row) -> bool {
    use sqlspec::ComparisonOp;

    match predicate {
        Predicate::Compare { column, op, value } => {
            let Some(actual) = non_null(row, column) else {
                return false;
            };
            if value.is_null() {
                return false;
            }
            match op {
                ComparisonOp::Equal => values_equal(actual, value),
                ComparisonOp::NotEqual => !values_equal(actual, value),
                ComparisonOp::GreaterThan => cmp_is(actual, value, |o| o == Ordering::Greater),
                ComparisonOp::GreaterThanOrEqual => {
                    cmp_is(actual, value, |o| o != Ordering::Less)
                }
                ComparisonOp::LessThan => cmp_is(actual, value, |o| o == Ordering::Less),
                ComparisonOp::LessThanOrEqual => cmp_is(actual, value, |o| o != Ordering::Greater),
            }
        }
        Predicate::Between {
            column,
            lower,
            upper,
        } => {
            let Some(actual) = non_null(row, column) else {
                return false;
            };
            cmp_is(actual, lower, |o| o != Ordering::Less)
                && cmp_is(actual, upper, |o| o != Ordering::Greater)
        }
        Predicate::Like {
            column,
            pattern,
            negated,
        } => {
            let Some(actual) = non_null(row, column).and_then(Value::as_str) else {
                return false;
            };
            like_matches(pattern, actual) != *negated
        }
        Predicate::In {
            column,
            values,
            negated,
        } => {
            let Some(actual) = non_null(row, column) else {
                return false;
            };
            let contained = values.iter().any(|candidate| values_equal(actual, candidate));
            contained != *negated
        }
        Predicate::Null { column, negated } => {
            let is_null = non_null(row, column).is_none();
            is_null != *negated
        }
        Predicate::Empty { column, negated } => {
            let Some(elements) = non_null(row, column).and_then(Value::as_array) else {
                return false;
            };
            elements.is_empty() != *negated
        }
        Predicate::Member {
            column,
            value,
            negated,
        } => {
            let Some(elements) = non_null(row, column).and_then(Value::as_array) else {
                return false;
            };
            let contained = elements.iter().any(|element| values_equal(element, value));
            contained != *negated
        }
        Predicate::And(children) => children.iter().all(|child| eval(child, row)),
        Predicate::Or(children) => children.iter().any(|child| eval(child, row)),
    }
}

fn non_null<'a>(row: &'a Row, column: &str) -> Option<&'a Value> {
    row.get(column).filter(|value| !value.is_null())
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(left), Some(right)) => left == right,
        _ => a == b,
    }
}

fn cmp_is(a: &Value, b: &Value, check: impl Fn(Ordering) -> bool) -> bool {
    value_cmp(a, b).map(check).unwrap_or(false)
}

fn value_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    if let (Some(left), Some(right)) = (a.as_f64(), b.as_f64()) {
        return left.partial_cmp(&right);
    }
    if let (Some(left), Some(right)) = (a.as_str(), b.as_str()) {
        return Some(left.cmp(right));
    }
    None
}

/// SQL LIKE: `%` matches any run, `_` any single character.
fn like_matches(pattern: &str, text: &str) -> bool {
    let mut regex_pattern = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '%' => regex_pattern.push_str(".*"),
            '_' => regex_pattern.push('.'),
            other => regex_pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex_pattern.push('$');
    Regex::new(&regex_pattern)
        .expect("LIKE pattern should translate to a valid regex")
        .is_match(text)
}
