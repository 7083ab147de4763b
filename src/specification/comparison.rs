//! Deferred ordering comparisons.

use super::PredicateSpecification;
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E, P> Field<E, P>
where
    E: Entity + 'static,
    P: IntoOperand + PartialOrd + Clone + Send + Sync + 'static,
{
    /// Deferred `field > value`.
    pub fn greater_than(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.greater_than(cb, &field, value.clone()))
    }

    /// Deferred `field >= value`.
    pub fn greater_than_or_equal_to(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| {
            path.greater_than_or_equal_to(cb, &field, value.clone())
        })
    }

    /// Deferred `field < value`.
    pub fn less_than(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| path.less_than(cb, &field, value.clone()))
    }

    /// Deferred `field <= value`.
    pub fn less_than_or_equal_to(&self, value: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| {
            path.less_than_or_equal_to(cb, &field, value.clone())
        })
    }

    /// Deferred `field BETWEEN lower AND upper`, inclusive on both bounds.
    pub fn between(&self, lower: P, upper: P) -> PredicateSpecification<E> {
        let field = *self;
        PredicateSpecification::new(move |path, cb| {
            path.between(cb, &field, lower.clone(), upper.clone())
        })
    }
}
