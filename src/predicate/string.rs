//! String pattern predicates.

use crate::criteria::{CriteriaBuilder, Path, Predicate};
use crate::schema::{Entity, Field};

/// Column value types that accept `LIKE` patterns.
///
/// Covers `String` and `Option<String>`; implement it for newtypes that
/// map to text columns.
pub trait TextColumn {}

impl TextColumn for String {}
impl TextColumn for Option<String> {}

impl<E: Entity> Path<E> {
    /// `field LIKE pattern` (`%` any run, `_` any single character).
    pub fn like<P: TextColumn>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        pattern: &str,
    ) -> Predicate {
        criteria_builder.like(self.get(field), pattern.to_string())
    }

    /// `field NOT LIKE pattern`
    pub fn not_like<P: TextColumn>(
        &self,
        criteria_builder: &CriteriaBuilder,
        field: &Field<E, P>,
        pattern: &str,
    ) -> Predicate {
        criteria_builder.not_like(self.get(field), pattern.to_string())
    }
}
