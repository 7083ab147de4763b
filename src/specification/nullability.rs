//! Deferred nullability builders, on optional columns only.

use super::PredicateSpecification;
use crate::schema::{Entity, Field};

impl<E, P> Field<E, Option<P>>
where
    E: Entity + 'static,
    P: 'static,
{
    /// Deferred `field IS NULL`.
    pub fn is_null(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_null(cb, &field))
    }

    /// Deferred `field IS NOT NULL`.
    pub fn is_not_null(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_not_null(cb, &field))
    }
}
