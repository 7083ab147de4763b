//! Deferred collection-column builders.

use super::PredicateSpecification;
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E, P> Field<E, Vec<P>>
where
    E: Entity + 'static,
    P: 'static,
{
    /// Deferred emptiness test on the collection column.
    pub fn is_empty(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_empty(cb, &field))
    }

    /// Deferred non-emptiness test on the collection column.
    pub fn is_not_empty(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_not_empty(cb, &field))
    }
}

impl<E, P> Field<E, Vec<P>>
where
    E: Entity + 'static,
    P: IntoOperand + Clone + Send + Sync + 'static,
{
    /// Deferred membership test; false against an empty collection.
    pub fn is_member(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_member(cb, &field, value.clone()))
    }

    /// Deferred non-membership test; true against an empty collection.
    pub fn is_not_member(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_not_member(cb, &field, value.clone()))
    }
}
