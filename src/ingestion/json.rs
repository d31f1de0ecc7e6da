//! JSON raw reader.
//!
//! The document must be a single JSON array. Its elements are passed through as-is; whether
//! they are objects of the right shape is decided by validation.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::ReadFailure;

/// Read a JSON file into untyped record values.
pub fn read_json_from_path(path: impl AsRef<Path>) -> Result<Vec<JsonValue>, ReadFailure> {
    let text = fs::read_to_string(path)?;
    read_json_from_str(&text)
}

/// Read JSON from an in-memory string.
pub fn read_json_from_str(input: &str) -> Result<Vec<JsonValue>, ReadFailure> {
    match serde_json::from_str::<JsonValue>(input)? {
        JsonValue::Array(items) => Ok(items),
        other => Err(ReadFailure::Malformed(format!(
            "json must be an array of objects, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::read_json_from_str;
    use crate::error::ReadFailure;

    #[test]
    fn reads_array_of_objects() {
        let rows = read_json_from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(rows, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn empty_array_is_empty() {
        assert!(read_json_from_str("[]").unwrap().is_empty());
    }

    #[test]
    fn top_level_object_is_malformed() {
        let err = read_json_from_str(r#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, ReadFailure::Malformed(_)));
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = read_json_from_str("[{\"id\":").unwrap_err();
        assert!(matches!(err, ReadFailure::Json(_)));
    }
}
