//! Core data model types.
//!
//! A record shape is described twice: statically, by a type implementing [`Record`] (whose
//! [`Record::Field`] enum makes every field reference valid by construction), and at runtime,
//! by a [`Schema`] (field name → [`DataType`]) that the validator checks untyped input against.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Date carried as text (e.g. `2024-01-15`).
    Date,
}

impl DataType {
    /// Whether values of this type take part in range filters and aggregation.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// The required fields of a record shape, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the declared type of a field by name, if present.
    pub fn data_type_of(&self, name: &str) -> Option<DataType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.data_type)
    }
}

/// A single scalar value read from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string (also used for date text).
    Utf8(String),
}

impl Value {
    /// Numeric view of the value. Non-numeric values yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the value. Non-text values yield `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8(s) => Some(s),
            _ => None,
        }
    }
}

/// Formats the value the way group keys are spelled: integral floats drop their fraction.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Utf8(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

/// A named field of some record shape.
pub trait FieldRef: Copy + Eq + Hash + fmt::Debug {
    /// The field's name as it appears in the schema and in source files.
    fn name(&self) -> &'static str;
}

/// A typed record shape.
///
/// `Field` enumerates every field of the shape; `NumericField` enumerates only the numeric
/// ones, so operations that need a number (such as range filters) cannot be handed a text
/// field.
pub trait Record: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned {
    /// Every field of the shape.
    type Field: FieldRef;
    /// The numeric subset of [`Self::Field`].
    type NumericField: FieldRef + Into<Self::Field>;

    /// Shape name used in error messages (e.g. `Sale`).
    const SHAPE: &'static str;

    /// Runtime descriptor of the shape, in positional field order.
    fn schema() -> Schema;

    /// Read a field.
    fn value(&self, field: Self::Field) -> Value;
}

#[cfg(test)]
mod tests {
    use super::{DataType, Field, Schema, Value};

    #[test]
    fn schema_lookups() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
        ]);
        assert_eq!(schema.index_of("name"), Some(1));
        assert_eq!(schema.index_of("missing"), None);
        assert_eq!(schema.data_type_of("id"), Some(DataType::Int64));
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn value_display_matches_group_key_spelling() {
        assert_eq!(Value::Float64(10.0).to_string(), "10");
        assert_eq!(Value::Float64(2.5).to_string(), "2.5");
        assert_eq!(Value::Int64(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("Books").to_string(), "Books");
    }

    #[test]
    fn numeric_view() {
        assert_eq!(Value::Int64(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float64(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("4").as_f64(), None);
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert!(DataType::Float64.is_numeric());
        assert!(!DataType::Date.is_numeric());
    }
}
