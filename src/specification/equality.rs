//! Deferred equality builders.

use super::PredicateSpecification;
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E, P> Field<E, P>
where
    E: Entity + 'static,
    P: IntoOperand + Clone + Send + Sync + 'static,
{
    /// Deferred `field = value`.
    pub fn equal(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.equal(cb, &field, value.clone()))
    }

    /// Deferred `field != value`.
    pub fn not_equal(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.not_equal(cb, &field, value.clone()))
    }
}
