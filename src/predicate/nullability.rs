//! Nullability predicates, available on optional columns only.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};

impl<E: Entity> Path<E> {
    /// `field IS NULL`
    pub fn is_null<P>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Option<P>>,
    ) -> Predicate {
        criteria_builder.is_null(self.get(field))
    }

    /// `field IS NOT NULL`
    pub fn is_not_null<P>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Option<P>>,
    ) -> Predicate {
        criteria_builder.is_not_null(self.get(field))
    }
}
