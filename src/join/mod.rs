//! Join and fetch DSL (feature `unstable-joins`).
//!
//! Produces joined paths and eager-load hints from association
//! descriptors, and a specification form that fetches, joins, then ANDs
//! predicates against the joined path. The sequencing of fetch followed by
//! join against the same association is collapsed to one rendered join
//! clause; fetch graph/predicate interaction has known behavioral edge
//! cases in host stores, which is why this surface is feature-gated and
//! may still change.

use crate::criteria::{JoinType, Path, Root};
use crate::schema::{Association, Entity};
use crate::specification::{PredicateSpecification, Specification};

impl<E, R> Association<E, R>
where
    E: Entity + 'static,
    R: Entity + 'static,
{
    /// Joins the association on `root`, returning the joined path.
    /// `JoinType::default()` is an inner join.
    pub fn join(&self, root: &Root<E>, join_type: JoinType) -> Path<R> {
        root.join(self, join_type)
    }

    /// Records a fetch (eager-load hint) of the association on `root`.
    pub fn fetch(&self, root: &Root<E>, join_type: JoinType) -> Path<R> {
        root.fetch(self, join_type)
    }

    /// A [`Specification`] that fetches the association, joins it, and
    /// ANDs `specs` against the joined path. An empty `specs` list leaves
    /// the fetch-join unfiltered.
    pub fn fetch_join_with_predicates(
        &self,
        join_type: JoinType,
        specs: Vec<PredicateSpecification<R>>,
    ) -> Specification<E> {
        let association = *self;
        Specification::new(move |root, cb| {
            association.fetch(root, join_type);
            let joined = association.join(root, join_type);
            cb.and_all(
                specs
                    .iter()
                    .map(|spec| spec.to_predicate(&joined, cb))
                    .collect(),
            )
        })
    }

    /// Single-predicate convenience over
    /// [`fetch_join_with_predicates`](Self::fetch_join_with_predicates).
    pub fn fetch_join_with_predicate(
        &self,
        join_type: JoinType,
        spec: PredicateSpecification<R>,
    ) -> Specification<E> {
        self.fetch_join_with_predicates(join_type, vec![spec])
    }
}
