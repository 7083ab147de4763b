//! Collection-column predicates.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};
use crate::value::IntoOperand;

impl<E: Entity> Path<E> {
    /// The collection column holds no elements.
    pub fn is_empty<P>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Vec<P>>,
    ) -> Predicate {
        criteria_builder.is_empty(self.get(field))
    }

    /// The collection column holds at least one element.
    pub fn is_not_empty<P>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Vec<P>>,
    ) -> Predicate {
        criteria_builder.is_not_empty(self.get(field))
    }

    /// `value` is a member of the collection column. False against an
    /// empty collection.
    pub fn is_member<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Vec<P>>,
        value: P,
    ) -> Predicate {
        criteria_builder.is_member(value.into_operand(), self.get(field))
    }

    /// `value` is not a member of the collection column. True against an
    /// empty collection.
    pub fn is_not_member<P: IntoOperand>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, Vec<P>>,
        value: P,
    ) -> Predicate {
        criteria_builder.is_not_member(value.into_operand(), self.get(field))
    }
}
