//! Deferred predicate construction.
//!
//! A specification captures a predicate-building computation and defers it
//! until query-build time, when the query supplies the root and the
//! criteria builder. Both forms are pure and safe to invoke any number of
//! times; nothing is cached.
//!
//! [`PredicateSpecification`] is path-level: it can resolve against the
//! root or against a joined path, which is what the fetch-join DSL feeds
//! it. [`Specification`] is root-level and is what
//! [`SelectQuery::filter`](crate::criteria::SelectQuery::filter) consumes;
//! `From`/[`at_root`](PredicateSpecification::at_root) lifts one into the
//! other.

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::Arc;

use crate::criteria::{CriteriaBuilder, Path, Predicate, Root};
use crate::schema::Entity;

mod boolean;
mod collection;
mod combiner;
mod comparison;
mod equality;
mod inclusion;
mod nullability;
mod string;

pub use combiner::{all_of, any_of, Combine};

/// Deferred predicate over any path of `E` (root or joined).
pub struct PredicateSpecification<E> {
    build: Arc<dyn Fn(&Path<E>, &CriteriaBuilder) -> Predicate + Send + Sync>,
}

impl<E: Entity + 'static> PredicateSpecification<E> {
    pub fn new(
        build: impl Fn(&Path<E>, &CriteriaBuilder) -> Predicate + Send + Sync + 'static,
    ) -> Self {
        Self {
            build: Arc::new(build),
        }
    }

    /// Produces the predicate for `path`.
    pub fn to_predicate(&self, path: &Path<E>, criteria_builder: &CriteriaBuilder) -> Predicate {
        (self.build)(path, criteria_builder)
    }

    /// ANDs this specification with `other`.
    pub fn and(self, other: Self) -> Self {
        Self::new(move |path, cb| {
            cb.conjunction(self.to_predicate(path, cb), other.to_predicate(path, cb))
        })
    }

    /// ORs this specification with `other`.
    pub fn or(self, other: Self) -> Self {
        Self::new(move |path, cb| {
            cb.disjunction(self.to_predicate(path, cb), other.to_predicate(path, cb))
        })
    }

    /// Lifts this specification to the query root.
    pub fn at_root(self) -> Specification<E> {
        self.into()
    }
}

impl<E> Clone for PredicateSpecification<E> {
    fn clone(&self) -> Self {
        Self {
            build: Arc::clone(&self.build),
        }
    }
}

impl<E> fmt::Debug for PredicateSpecification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredicateSpecification")
    }
}

impl<E: Entity + 'static> BitAnd for PredicateSpecification<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<E: Entity + 'static> BitOr for PredicateSpecification<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

/// Deferred predicate over the query root of `E`.
pub struct Specification<E> {
    build: Arc<dyn Fn(&Root<E>, &CriteriaBuilder) -> Predicate + Send + Sync>,
}

impl<E: Entity + 'static> Specification<E> {
    pub fn new(
        build: impl Fn(&Root<E>, &CriteriaBuilder) -> Predicate + Send + Sync + 'static,
    ) -> Self {
        Self {
            build: Arc::new(build),
        }
    }

    /// Produces the predicate for `root`, recording any joins or fetches
    /// on it.
    pub fn to_predicate(&self, root: &Root<E>, criteria_builder: &CriteriaBuilder) -> Predicate {
        (self.build)(root, criteria_builder)
    }

    /// ANDs this specification with `other`.
    pub fn and(self, other: Self) -> Self {
        Self::new(move |root, cb| {
            cb.conjunction(self.to_predicate(root, cb), other.to_predicate(root, cb))
        })
    }

    /// ORs this specification with `other`.
    pub fn or(self, other: Self) -> Self {
        Self::new(move |root, cb| {
            cb.disjunction(self.to_predicate(root, cb), other.to_predicate(root, cb))
        })
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            build: Arc::clone(&self.build),
        }
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Specification")
    }
}

impl<E: Entity + 'static> BitAnd for Specification<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<E: Entity + 'static> BitOr for Specification<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<E: Entity + 'static> From<PredicateSpecification<E>> for Specification<E> {
    fn from(spec: PredicateSpecification<E>) -> Self {
        Specification::new(move |root, cb| spec.to_predicate(root, cb))
    }
}
