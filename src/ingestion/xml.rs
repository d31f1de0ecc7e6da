//! XML raw reader.
//!
//! Records are the item elements directly under the root element (`<sales><sale>…</sale></sales>`
//! by default). Each child element of an item becomes one field, its text converted according to
//! the declared field type. One item and many items both yield a sequence.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Value as JsonValue};

use crate::error::ReadFailure;
use crate::types::Schema;

use super::csv::convert_cell;

/// Root and item element names that locate records in an XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlPath {
    pub root: String,
    pub item: String,
}

impl XmlPath {
    pub fn new(root: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            item: item.into(),
        }
    }
}

impl Default for XmlPath {
    fn default() -> Self {
        Self::new("sales", "sale")
    }
}

/// Read an XML file into untyped record objects.
pub fn read_xml_from_path(
    path: impl AsRef<Path>,
    xml_path: &XmlPath,
    schema: &Schema,
) -> Result<Vec<JsonValue>, ReadFailure> {
    let text = fs::read_to_string(path)?;
    read_xml_from_str(&text, xml_path, schema)
}

/// Read XML from an in-memory string.
pub fn read_xml_from_str(
    input: &str,
    xml_path: &XmlPath,
    schema: &Schema,
) -> Result<Vec<JsonValue>, ReadFailure> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut records = Vec::new();
    let mut current: Option<Map<String, JsonValue>> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if stack.is_empty() {
                    check_root(&name, xml_path)?;
                    saw_root = true;
                }
                stack.push(name);
                if is_item(&stack, xml_path) {
                    current = Some(Map::new());
                }
                text.clear();
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if stack.is_empty() {
                    check_root(&name, xml_path)?;
                    saw_root = true;
                    continue;
                }
                stack.push(name);
                if is_item(&stack, xml_path) {
                    records.push(JsonValue::Object(Map::new()));
                } else if stack.len() == 3 {
                    if let Some(obj) = current.as_mut() {
                        insert_field(obj, &stack[2], "", schema);
                    }
                }
                stack.pop();
            }
            Event::Text(t) => {
                let s = t.unescape().map_err(quick_xml::Error::from)?;
                text.push_str(&s);
            }
            Event::CData(c) => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::End(_) => {
                if is_item(&stack, xml_path) {
                    if let Some(obj) = current.take() {
                        records.push(JsonValue::Object(obj));
                    }
                } else if stack.len() == 3 {
                    if let Some(obj) = current.as_mut() {
                        insert_field(obj, &stack[2], &text, schema);
                    }
                }
                stack.pop();
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ReadFailure::Malformed(format!(
            "xml has no <{}> root element",
            xml_path.root
        )));
    }
    Ok(records)
}

fn check_root(name: &str, xml_path: &XmlPath) -> Result<(), ReadFailure> {
    if name == xml_path.root {
        Ok(())
    } else {
        Err(ReadFailure::Malformed(format!(
            "expected <{}> root element, found <{name}>",
            xml_path.root
        )))
    }
}

fn is_item(stack: &[String], xml_path: &XmlPath) -> bool {
    stack.len() == 2 && stack[0] == xml_path.root && stack[1] == xml_path.item
}

fn insert_field(obj: &mut Map<String, JsonValue>, name: &str, raw: &str, schema: &Schema) {
    let value = match schema.data_type_of(name) {
        Some(data_type) => convert_cell(raw, data_type),
        None => JsonValue::String(raw.to_owned()),
    };
    obj.insert(name.to_owned(), value);
}
