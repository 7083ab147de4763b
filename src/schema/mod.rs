//! Entity schema descriptors: tables, typed fields and associations.
//!
//! Field and association descriptors are compile-time artifacts. The
//! [`entity!`](crate::entity) macro declares them together with the
//! [`Entity`] schema so that descriptor and column list cannot drift;
//! descriptors built by hand should be checked once at startup via
//! [`validate`] and [`EntitySchema::check_field`].

use std::fmt;
use std::marker::PhantomData;

use crate::error::{SpecError, SpecResult};

mod macros;

/// Static schema of one mapped entity type.
pub trait Entity {
    /// The backing table name.
    const TABLE: &'static str;

    /// Column names, in declaration order.
    fn columns() -> &'static [&'static str];

    /// Snapshot of the schema, for validation and diagnostics.
    fn schema() -> EntitySchema {
        EntitySchema {
            table: Self::TABLE,
            columns: Self::columns(),
        }
    }
}

/// Table name plus column list of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

impl EntitySchema {
    /// Checks that `field` names a declared column of this schema.
    pub fn check_field<E, P>(&self, field: &Field<E, P>) -> SpecResult<()> {
        if self.columns.contains(&field.column()) {
            Ok(())
        } else {
            Err(SpecError::UnknownColumn {
                table: self.table,
                column: field.column().to_string(),
            })
        }
    }
}

/// Validates an entity schema: it must declare at least one column, with no
/// duplicates. Intended to run once at startup for hand-rolled schemas.
pub fn validate<E: Entity>() -> SpecResult<()> {
    let schema = E::schema();
    if schema.columns.is_empty() {
        return Err(SpecError::EmptySchema {
            table: schema.table,
        });
    }
    for (index, column) in schema.columns.iter().enumerate() {
        if schema.columns[..index].contains(column) {
            return Err(SpecError::DuplicateColumn {
                table: schema.table,
                column,
            });
        }
    }
    Ok(())
}

/// Checks that both legs of an association's join condition name declared
/// columns of their respective tables.
pub fn check_association<E: Entity, R: Entity>(
    association: &Association<E, R>,
) -> SpecResult<()> {
    if !E::columns().contains(&association.local_column()) {
        return Err(SpecError::UnknownColumn {
            table: E::TABLE,
            column: association.local_column().to_string(),
        });
    }
    if !R::columns().contains(&association.foreign_column()) {
        return Err(SpecError::UnknownColumn {
            table: R::TABLE,
            column: association.foreign_column().to_string(),
        });
    }
    Ok(())
}

/// Typed reference to one column of `E`, carrying the value type `P`.
///
/// A `Field` is the compile-time replacement for a reflective property
/// reference: it pairs the owning entity type and the value type with the
/// column name, so operator methods only accept operands of the right type.
pub struct Field<E, P> {
    column: &'static str,
    _marker: PhantomData<fn(E) -> P>,
}

impl<E, P> Field<E, P> {
    pub const fn new(column: &'static str) -> Self {
        Self {
            column,
            _marker: PhantomData,
        }
    }

    pub const fn column(&self) -> &'static str {
        self.column
    }
}

// Manual impls: derives would put bounds on E and P.
impl<E, P> Clone for Field<E, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, P> Copy for Field<E, P> {}

impl<E, P> fmt::Debug for Field<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("column", &self.column).finish()
    }
}

/// Whether an association reaches one row or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    ToOne,
    ToMany,
}

/// Typed reference to an association from `E` to `R`, carrying the join
/// condition as a pair of columns: one on `E`'s table, one on `R`'s.
pub struct Association<E, R> {
    name: &'static str,
    kind: AssociationKind,
    local_column: &'static str,
    foreign_column: &'static str,
    _marker: PhantomData<fn(E) -> R>,
}

impl<E, R> Association<E, R> {
    pub const fn new(
        name: &'static str,
        kind: AssociationKind,
        local_column: &'static str,
        foreign_column: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            local_column,
            foreign_column,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> AssociationKind {
        self.kind
    }

    /// Column on `E`'s table in the join condition.
    pub const fn local_column(&self) -> &'static str {
        self.local_column
    }

    /// Column on `R`'s table in the join condition.
    pub const fn foreign_column(&self) -> &'static str {
        self.foreign_column
    }
}

impl<E, R> Clone for Association<E, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, R> Copy for Association<E, R> {}

impl<E, R> fmt::Debug for Association<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
