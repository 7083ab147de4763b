//! The criteria layer: predicate expression trees, the factory that builds
//! them, roots/paths for column resolution, and `SELECT` rendering.
//!
//! This is the collaborator surface the DSL delegates to. It owns no
//! state beyond what a single query build accumulates and performs no I/O;
//! rendered SQL plus bind parameters are handed off to whatever executes
//! queries.

pub mod builder;
pub mod path;
pub mod query;
pub mod types;

pub use builder::CriteriaBuilder;
pub use path::{Path, Root};
pub use query::SelectQuery;
pub use types::{ComparisonOp, FetchClause, JoinClause, JoinType, Predicate};
