//! Equality predicates.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E: Entity> Path<E> {
    /// `field = value`
    pub fn equal<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.equal(self.get(field), value.into_operand())
    }

    /// `field != value`
    pub fn not_equal<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.not_equal(self.get(field), value.into_operand())
    }
}
