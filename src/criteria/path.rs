//! Roots and paths: column resolution plus join/fetch recording.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::schema::{Association, Entity, Field};

use super::types::{FetchClause, JoinClause, JoinType};

/// A resolvable path over `E`'s table: either the query root itself or a
/// table reached through a join.
pub struct Path<E> {
    _marker: PhantomData<fn(E)>,
}

impl<E: Entity> Path<E> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Resolves a field descriptor to its qualified column.
    ///
    /// # Panics
    ///
    /// Panics when `field` names a column `E`'s schema does not declare.
    /// Descriptors emitted by [`entity!`](crate::entity) cannot trip this;
    /// hand-built ones should be checked at startup via
    /// [`EntitySchema::check_field`](crate::schema::EntitySchema::check_field).
    pub fn get<P>(&self, field: &Field<E, P>) -> String {
        let column = field.column();
        if !E::columns().contains(&column) {
            panic!(
                "column '{}' is not declared on table '{}'",
                column,
                E::TABLE
            );
        }
        format!("{}.{}", E::TABLE, column)
    }

    pub fn table(&self) -> &'static str {
        E::TABLE
    }
}

impl<E: Entity> fmt::Debug for Path<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path").field("table", &E::TABLE).finish()
    }
}

/// The query root: the `FROM` table plus the joins and fetches recorded
/// while specifications resolve against it.
///
/// Join recording goes through a `RefCell` so that predicate construction
/// stays a pure `&Root` affair; the cell is scoped to one query build and
/// drained by [`SelectQuery`](super::SelectQuery).
pub struct Root<E> {
    path: Path<E>,
    joins: RefCell<Vec<JoinClause>>,
    fetches: RefCell<Vec<FetchClause>>,
}

impl<E: Entity> Root<E> {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            joins: RefCell::new(Vec::new()),
            fetches: RefCell::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path<E> {
        &self.path
    }

    /// Joins `association`'s target table, recording the clause and
    /// returning the joined path.
    pub fn join<R: Entity>(
        &self,
        association: &Association<E, R>,
        join_type: JoinType,
    ) -> Path<R> {
        self.joins.borrow_mut().push(JoinClause {
            join_type,
            table: R::TABLE,
            on: (
                format!("{}.{}", E::TABLE, association.local_column()),
                format!("{}.{}", R::TABLE, association.foreign_column()),
            ),
        });
        Path::new()
    }

    /// Records a fetch (eager-load) of `association`'s target table and
    /// returns the fetched path.
    pub fn fetch<R: Entity>(
        &self,
        association: &Association<E, R>,
        join_type: JoinType,
    ) -> Path<R> {
        self.fetches.borrow_mut().push(FetchClause {
            join_type,
            table: R::TABLE,
            on: (
                format!("{}.{}", E::TABLE, association.local_column()),
                format!("{}.{}", R::TABLE, association.foreign_column()),
            ),
        });
        Path::new()
    }

    pub(crate) fn take_joins(&self) -> Vec<JoinClause> {
        self.joins.take()
    }

    pub(crate) fn take_fetches(&self) -> Vec<FetchClause> {
        self.fetches.take()
    }
}

impl<E: Entity> Default for Root<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Deref for Root<E> {
    type Target = Path<E>;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl<E: Entity> fmt::Debug for Root<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root")
            .field("table", &E::TABLE)
            .field("joins", &self.joins.borrow().len())
            .field("fetches", &self.fetches.borrow().len())
            .finish()
    }
}
