//! Deferred string pattern builders.

use super::PredicateSpecification;
use crate::predicate::TextColumn;
use crate::schema::{Entity, Field};

impl<E, P> Field<E, P>
where
    E: Entity + 'static,
    P: TextColumn + 'static,
{
    /// Deferred `field LIKE pattern`.
    pub fn like(&self, pattern: impl Into<String>) -> PredicateSpecification<E> {
        let field = *self;
        let pattern = pattern.into();
        PredicateSpecification::new(move |path, cb| path.like(cb, &field, &pattern))
    }

    /// Deferred `field NOT LIKE pattern`.
    pub fn not_like(&self, pattern: impl Into<String>) -> PredicateSpecification<E> {
        let field = *self;
        let pattern = pattern.into();
        PredicateSpecification::new(move |path, cb| path.not_like(cb, &field, &pattern))
    }
}
