//! # sqlspec: typed query specifications over a SQL criteria builder
//!
//! A small utility library for building query predicates from typed field
//! descriptors and composing them into reusable specification values. Every
//! operator is a one-line delegation into the criteria layer's predicate
//! factory; the criteria layer assembles an expression tree and renders it
//! to parameterized `SELECT` SQL. Executing that SQL -- connections,
//! transactions, result mapping -- is the host application's business, not
//! this crate's.
//!
//! ```
//! use sqlspec::{all_of, SelectQuery};
//!
//! struct Persona;
//!
//! sqlspec::entity! {
//!     Persona => "personas" {
//!         ID: i64 => "id",
//!         NAME: String => "name",
//!         AGE: i32 => "age",
//!     }
//! }
//!
//! let spec = all_of(vec![
//!     Persona::NAME.like("John%").at_root(),
//!     Persona::AGE.between(25, 35).at_root(),
//! ]);
//! let (sql, params) = SelectQuery::new().filter(spec).to_sql_with_params();
//! assert_eq!(
//!     sql,
//!     "SELECT personas.* FROM personas \
//!      WHERE (personas.name LIKE $1 AND personas.age BETWEEN $2 AND $3)"
//! );
//! assert_eq!(params.len(), 3);
//! ```

pub mod criteria;
pub mod error;
pub mod predicate;
pub mod schema;
pub mod specification;
pub mod value;

#[cfg(feature = "unstable-joins")]
pub mod join;

pub use criteria::{
    ComparisonOp, CriteriaBuilder, JoinType, Path, Predicate, Root, SelectQuery,
};
pub use error::{SpecError, SpecResult};
pub use predicate::{BoolColumn, TextColumn};
pub use schema::{Association, AssociationKind, Entity, EntitySchema, Field};
pub use specification::{all_of, any_of, Combine, PredicateSpecification, Specification};
pub use value::IntoOperand;
