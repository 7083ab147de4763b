//! Deferred boolean builders.

use super::PredicateSpecification;
use crate::predicate::BoolColumn;
use crate::schema::{Entity, Field};

impl<E, P> Field<E, P>
where
    E: Entity + 'static,
    P: BoolColumn + 'static,
{
    /// Deferred `field = TRUE`.
    pub fn is_true(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_true(cb, &field))
    }

    /// Deferred `field = FALSE`.
    pub fn is_false(&self) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_false(cb, &field))
    }
}
