//! Ordering comparisons. The `PartialOrd` bound carries the compile-time
//! intent that the column type is ordered; the store does the comparing.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E: Entity> Path<E> {
    /// `field > value`
    pub fn greater_than<P: IntoOperand + PartialOrd>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.greater_than(self.get(field), value.into_operand())
    }

    /// `field >= value`
    pub fn greater_than_or_equal_to<P: IntoOperand + PartialOrd>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.greater_than_or_equal_to(self.get(field), value.into_operand())
    }

    /// `field < value`
    pub fn less_than<P: IntoOperand + PartialOrd>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.less_than(self.get(field), value.into_operand())
    }

    /// `field <= value`
    pub fn less_than_or_equal_to<P: IntoOperand + PartialOrd>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        value: P,
    ) -> Predicate {
        criteria_builder.less_than_or_equal_to(self.get(field), value.into_operand())
    }

    /// `field BETWEEN lower AND upper`, inclusive on both bounds.
    pub fn between<P: IntoOperand + PartialOrd>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        lower: P,
        upper: P,
    ) -> Predicate {
        criteria_builder.between(self.get(field), lower.into_operand(), upper.into_operand())
    }
}
