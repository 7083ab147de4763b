//! Error types for the schema layer.
//!
//! Predicate construction itself has no error taxonomy: misuse (an unknown
//! column reached through a hand-built descriptor, an empty combinator
//! list) fails fast with a panic, and everything else is caught by the
//! type system. The fallible surface is schema validation of descriptors
//! declared outside the [`entity!`](crate::entity) macro.

use thiserror::Error;

/// Result type for schema validation.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors reported by schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A table declares the same column twice.
    #[error("table '{table}' declares column '{column}' more than once")]
    DuplicateColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A field or association descriptor names a column the table does not
    /// declare.
    #[error("column '{column}' is not declared on table '{table}'")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },

    /// A table declares no columns at all.
    #[error("table '{table}' declares no columns")]
    EmptySchema { table: &'static str },
}
