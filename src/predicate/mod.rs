//! Predicate builders: one operation per operator, each a single delegated
//! call against the criteria builder.
//!
//! These are the immediate (non-deferred) forms, implemented on
//! [`Path`](crate::criteria::Path) so they work against the root and
//! against joined paths alike. The deferred forms live in
//! [`specification`](crate::specification).

pub mod boolean;
pub mod collection;
pub mod comparison;
pub mod equality;
pub mod inclusion;
pub mod nullability;
pub mod string;

pub use boolean::BoolColumn;
pub use string::TextColumn;
