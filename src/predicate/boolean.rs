//! Boolean predicates.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};

/// Column value types usable with `is_true`/`is_false`.
pub trait BoolColumn {}

impl BoolColumn for bool {}
impl BoolColumn for Option<bool> {}

impl<E: Entity> Path<E> {
    /// `field = TRUE`
    pub fn is_true<P: BoolColumn>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
    ) -> Predicate {
        criteria_builder.is_true(self.get(field))
    }

    /// `field = FALSE`
    pub fn is_false<P: BoolColumn>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
    ) -> Predicate {
        criteria_builder.is_false(self.get(field))
    }
}
