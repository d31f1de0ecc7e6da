//! Shape predicates over untyped input.
//!
//! Validation is strict: a required field must be an own key of the object and its JSON type
//! must match the declared [`DataType`] exactly. A numeric string is not a number, and `null`
//! never satisfies a required field. Undeclared extra keys are ignored.

use serde_json::Value as JsonValue;

use crate::records::{Sale, User};
use crate::types::{DataType, Record, Schema};

/// Returns `true` if `value` is an object carrying every field of `schema` with the declared type.
pub fn is_shape(value: &JsonValue, schema: &Schema) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    schema.fields.iter().all(|field| {
        obj.get(&field.name)
            .is_some_and(|v| matches_type(v, field.data_type))
    })
}

/// Returns `true` if `value` is an array whose every element satisfies [`is_shape`].
///
/// An empty array conforms vacuously.
pub fn is_collection_of(value: &JsonValue, schema: &Schema) -> bool {
    match value.as_array() {
        Some(items) => items.iter().all(|item| is_shape(item, schema)),
        None => false,
    }
}

/// [`is_shape`] for the schema of `T`.
pub fn is_record<T: Record>(value: &JsonValue) -> bool {
    is_shape(value, &T::schema())
}

/// [`is_collection_of`] for the schema of `T`.
pub fn is_record_array<T: Record>(value: &JsonValue) -> bool {
    is_collection_of(value, &T::schema())
}

pub fn is_sale(value: &JsonValue) -> bool {
    is_record::<Sale>(value)
}

pub fn is_sale_array(value: &JsonValue) -> bool {
    is_record_array::<Sale>(value)
}

pub fn is_user(value: &JsonValue) -> bool {
    is_record::<User>(value)
}

pub fn is_user_array(value: &JsonValue) -> bool {
    is_record_array::<User>(value)
}

fn matches_type(v: &JsonValue, data_type: DataType) -> bool {
    match data_type {
        DataType::Int64 => v.is_i64(),
        DataType::Float64 => v.is_number(),
        DataType::Bool => v.is_boolean(),
        DataType::Utf8 | DataType::Date => v.is_string(),
    }
}
