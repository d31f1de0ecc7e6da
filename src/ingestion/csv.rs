//! CSV raw reader.

use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::error::ReadFailure;
use crate::types::{DataType, Schema};

/// Read a CSV file into untyped record objects.
///
/// Rules:
///
/// - The first line is a header and is skipped.
/// - Cells map positionally onto the schema's field order; header names are not consulted.
/// - Cells are converted according to the declared field type when they parse; otherwise they
///   are kept as text and left for validation to reject.
/// - A row with fewer cells than fields omits the trailing keys.
pub fn read_csv_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
) -> Result<Vec<JsonValue>, ReadFailure> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr, schema)
}

/// Read CSV data from an existing CSV reader.
pub fn read_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> Result<Vec<JsonValue>, ReadFailure> {
    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut obj = Map::with_capacity(schema.fields.len());
        for (field, raw) in schema.fields.iter().zip(record.iter()) {
            obj.insert(field.name.clone(), convert_cell(raw, field.data_type));
        }
        out.push(JsonValue::Object(obj));
    }
    Ok(out)
}

/// Convert a text cell into the JSON value its declared type calls for.
///
/// Conversion never fails: unparseable cells stay strings.
pub(crate) fn convert_cell(raw: &str, data_type: DataType) -> JsonValue {
    let trimmed = raw.trim();
    match data_type {
        DataType::Int64 => match trimmed.parse::<i64>() {
            Ok(v) => JsonValue::from(v),
            Err(_) => JsonValue::String(trimmed.to_owned()),
        },
        DataType::Float64 => trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(trimmed.to_owned())),
        DataType::Bool => match parse_bool(trimmed) {
            Some(v) => JsonValue::Bool(v),
            None => JsonValue::String(trimmed.to_owned()),
        },
        DataType::Utf8 | DataType::Date => JsonValue::String(trimmed.to_owned()),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Some(true),
        "false" | "f" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{convert_cell, read_csv_from_reader};
    use crate::records::Sale;
    use crate::types::{DataType, Record};

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn maps_cells_positionally_and_skips_header() {
        let input = "a,b,c,d,e,f\n1,Laptop,Electronics,999.99,2,2024-01-15\n";
        let rows = read_csv_from_reader(&mut reader(input), &Sale::schema()).unwrap();
        assert_eq!(
            rows,
            vec![json!({
                "id": 1,
                "product": "Laptop",
                "category": "Electronics",
                "price": 999.99,
                "quantity": 2,
                "date": "2024-01-15"
            })]
        );
    }

    #[test]
    fn short_rows_omit_trailing_fields() {
        let input = "id,product,category,price,quantity,date\n1,Laptop,Electronics\n";
        let rows = read_csv_from_reader(&mut reader(input), &Sale::schema()).unwrap();
        let obj = rows[0].as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("price"));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let input = "id,product,category,price,quantity,date\n1,A,B,1,1,2024-01-01\n,,,,,\n";
        let rows = read_csv_from_reader(&mut reader(input), &Sale::schema()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn unparseable_cells_stay_text() {
        assert_eq!(convert_cell("abc", DataType::Float64), json!("abc"));
        assert_eq!(convert_cell("2.5", DataType::Int64), json!("2.5"));
        assert_eq!(convert_cell(" 7 ", DataType::Int64), json!(7));
        assert_eq!(convert_cell("TRUE", DataType::Bool), json!(true));
        assert_eq!(convert_cell("maybe", DataType::Bool), json!("maybe"));
        assert_eq!(convert_cell("42", DataType::Utf8), json!("42"));
    }
}
