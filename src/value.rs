//! Operand conversion into the bind-value representation carried inside
//! predicates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

/// Conversion of a Rust operand into the value representation the criteria
/// layer binds into SQL.
///
/// Implemented for the primitive scalars, `String`/`&str`, [`Uuid`], the
/// common `chrono` types and `Option<T>` (where `None` binds as SQL NULL).
pub trait IntoOperand {
    fn into_operand(self) -> Value;
}

macro_rules! operand_via_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> Value {
                    Value::from(self)
                }
            }
        )+
    };
}

operand_via_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, String);

impl IntoOperand for &str {
    fn into_operand(self) -> Value {
        Value::from(self)
    }
}

impl IntoOperand for Uuid {
    fn into_operand(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoOperand for DateTime<Utc> {
    fn into_operand(self) -> Value {
        Value::String(self.to_rfc3339())
    }
}

impl IntoOperand for NaiveDateTime {
    fn into_operand(self) -> Value {
        Value::String(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl IntoOperand for NaiveDate {
    fn into_operand(self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: IntoOperand> IntoOperand for Option<T> {
    fn into_operand(self) -> Value {
        match self {
            Some(value) => value.into_operand(),
            None => Value::Null,
        }
    }
}
