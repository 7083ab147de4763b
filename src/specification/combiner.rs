//! Variadic AND/OR combinators.

use super::{PredicateSpecification, Specification};
use crate::schema::Entity;

/// Specifications that compose under AND/OR. Implemented by
/// [`Specification`] and [`PredicateSpecification`]; the variadic
/// combinators are generic over it.
pub trait Combine: Sized {
    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
}

impl<E: Entity + 'static> Combine for Specification<E> {
    fn and(self, other: Self) -> Self {
        Specification::and(self, other)
    }

    fn or(self, other: Self) -> Self {
        Specification::or(self, other)
    }
}

impl<E: Entity + 'static> Combine for PredicateSpecification<E> {
    fn and(self, other: Self) -> Self {
        PredicateSpecification::and(self, other)
    }

    fn or(self, other: Self) -> Self {
        PredicateSpecification::or(self, other)
    }
}

/// ANDs all given specifications together, reducing pairwise left to
/// right.
///
/// # Panics
///
/// Panics when `specs` is empty: an empty combination is a caller bug and
/// must not silently become a vacuous predicate.
pub fn all_of<S: Combine>(specs: Vec<S>) -> S {
    specs
        .into_iter()
        .reduce(Combine::and)
        .expect("all_of requires at least one specification")
}

/// ORs all given specifications together, reducing pairwise left to
/// right.
///
/// # Panics
///
/// Panics when `specs` is empty, like [`all_of`].
pub fn any_of<S: Combine>(specs: Vec<S>) -> S {
    specs
        .into_iter()
        .reduce(Combine::or)
        .expect("any_of requires at least one specification")
}
