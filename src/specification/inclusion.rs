//! Deferred inclusion builders.

use super::PredicateSpecification;
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E, P> Field<E, P>
where
    E: Entity + 'static,
    P: IntoOperand + Clone + Send + Sync + 'static,
{
    /// Deferred `field IN (values...)`.
    pub fn is_in(&self, values: Vec<P>) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.is_in(cb, &field, values.clone()))
    }

    /// Deferred `field NOT IN (values...)`.
    pub fn not_in(&self, values: Vec<P>) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.not_in(cb, &field, values.clone()))
    }
}
