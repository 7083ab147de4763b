//! Inclusion predicates.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E: Entity> Path<E> {
    /// `field IN (values...)`
    pub fn is_in<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        values: Vec<P>,
    ) -> Predicate {
        criteria_builder.is_in(
            self.get(field),
            values.into_iter().map(IntoOperand::into_operand).collect(),
        )
    }

    /// `field NOT IN (values...)`
    pub fn not_in<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        values: Vec<P>,
    ) -> Predicate {
        criteria_builder.not_in(
            self.get(field),
            values.into_iter().map(IntoOperand::into_operand).collect(),
        )
    }
}
