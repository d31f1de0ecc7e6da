//! Ordering rules for field-based sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Direction of [`crate::processing::Analyzer::sort_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Compare two field values.
///
/// - two numbers compare numerically (`NaN` compares equal to everything)
/// - two strings compare with [`compare_text`]
/// - anything else compares equal, so a stable sort leaves such pairs in place
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => return x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) | (None, Some(_)) => return Ordering::Equal,
        (None, None) => {}
    }
    match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => compare_text(x, y),
        _ => Ordering::Equal,
    }
}

/// Equality used by field filters: numbers compare by value regardless of integer/float
/// representation, everything else structurally.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Case-insensitive order first, then code-point order to break ties.
///
/// Keeps `"apple" < "Banana" < "cherry"`, the way a dictionary collation orders words.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{compare_text, compare_values, values_equal};
    use crate::types::Value;

    #[test]
    fn numbers_compare_numerically_across_int_and_float() {
        assert_eq!(compare_values(&Value::Int64(2), &Value::Float64(10.0)), Ordering::Less);
        assert_eq!(compare_values(&Value::Float64(3.5), &Value::Float64(3.5)), Ordering::Equal);
        assert_eq!(
            compare_values(&Value::Float64(f64::NAN), &Value::Float64(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn text_ignores_case_first() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Banana", "cherry"), Ordering::Less);
        assert_eq!(compare_text("a", "A"), Ordering::Greater);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }

    #[test]
    fn mixed_types_compare_equal() {
        assert_eq!(compare_values(&Value::Int64(1), &Value::from("1")), Ordering::Equal);
        assert_eq!(compare_values(&Value::Bool(true), &Value::Bool(false)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Null, &Value::from("x")), Ordering::Equal);
    }

    #[test]
    fn equality_treats_int_and_float_alike() {
        assert!(values_equal(&Value::Int64(10), &Value::Float64(10.0)));
        assert!(!values_equal(&Value::Int64(10), &Value::from("10")));
        assert!(values_equal(&Value::from("Books"), &Value::from("Books")));
    }
}
