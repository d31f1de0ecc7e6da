//! Presentation of an [`AnalysisResult`] as a text table or JSON.
//!
//! Rendering only reads the result.

use std::fmt::Write as _;

use chrono::SecondsFormat;
use serde_json::{Map, Value as JsonValue};

use crate::error::ReportError;
use crate::processing::AnalysisResult;
use crate::types::Record;

/// Output format of [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Options controlling [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    /// Include record count, timestamp and aggregates.
    pub show_summary: bool,
    /// Include the records themselves.
    pub show_details: bool,
    pub format: OutputFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Analysis Report".to_string(),
            show_summary: true,
            show_details: true,
            format: OutputFormat::Table,
        }
    }
}

/// Render `result` according to `options`.
pub fn render<T: Record>(result: &AnalysisResult<T>, options: &ReportOptions) -> Result<String, ReportError> {
    match options.format {
        OutputFormat::Table => render_table(result, options),
        OutputFormat::Json => render_json(result, options),
    }
}

fn render_table<T: Record>(result: &AnalysisResult<T>, options: &ReportOptions) -> Result<String, ReportError> {
    let mut out = String::new();
    let _ = writeln!(out, "{}", options.title);
    let _ = writeln!(out, "{}", "=".repeat(options.title.chars().count()));

    if options.show_summary {
        let summary = result.summary();
        let _ = writeln!(out);
        let _ = writeln!(out, "Records:   {}", summary.total);
        let _ = writeln!(
            out,
            "Generated: {}",
            summary.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        if let Some(aggregates) = result.aggregates() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Aggregates:");
            let width = aggregates.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in aggregates {
                let _ = writeln!(out, "  {key:<width$}  {}", format_number(*value));
            }
        }
    }

    if options.show_details {
        let _ = writeln!(out);
        if result.data().is_empty() {
            let _ = writeln!(out, "(no records)");
        } else {
            write_records(&mut out, result.data())?;
        }
    }

    Ok(out)
}

fn write_records<T: Record>(out: &mut String, records: &[T]) -> Result<(), ReportError> {
    let schema = T::schema();
    let headers: Vec<&str> = schema.field_names().collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
    for record in records {
        let obj = serde_json::to_value(record)?;
        rows.push(headers.iter().map(|h| cell_text(obj.get(*h))).collect());
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        write_row(out, row.iter().map(String::as_str), &widths);
    }
    Ok(())
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

fn cell_text(v: Option<&JsonValue>) -> String {
    match v {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.as_f64().map_or_else(|| n.to_string(), format_number),
        Some(other) => other.to_string(),
    }
}

/// Integral values print without a fraction, others with at most two decimals.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn render_json<T: Record>(result: &AnalysisResult<T>, options: &ReportOptions) -> Result<String, ReportError> {
    let mut obj = Map::new();
    obj.insert("title".to_string(), JsonValue::String(options.title.clone()));
    if options.show_summary {
        obj.insert("summary".to_string(), serde_json::to_value(result.summary())?);
        if let Some(aggregates) = result.aggregates() {
            obj.insert("aggregates".to_string(), serde_json::to_value(aggregates)?);
        }
    }
    if options.show_details {
        obj.insert("data".to_string(), serde_json::to_value(result.data())?);
    }
    Ok(serde_json::to_string_pretty(&JsonValue::Object(obj))?)
}

#[cfg(test)]
mod tests {
    use super::{OutputFormat, ReportOptions, format_number, render};
    use crate::processing::{AggregateConfig, AggregateOp, Analyzer};
    use crate::records::{Sale, SaleField};

    fn sales() -> Vec<Sale> {
        vec![
            Sale {
                id: 1,
                product: "Laptop".into(),
                category: "Electronics".into(),
                price: 999.99,
                quantity: 2,
                date: "2024-01-15".into(),
            },
            Sale {
                id: 2,
                product: "Novel".into(),
                category: "Books".into(),
                price: 15.0,
                quantity: 3,
                date: "2024-01-16".into(),
            },
        ]
    }

    #[test]
    fn table_contains_summary_aggregates_and_rows() {
        let config = AggregateConfig::new().with(SaleField::Price, AggregateOp::Sum);
        let result = Analyzer::new(&sales()).analyze(Some(&config));
        let text = render(&result, &ReportOptions::default()).unwrap();

        assert!(text.starts_with("Analysis Report\n===============\n"));
        assert!(text.contains("Records:   2"));
        assert!(text.contains("price_sum  1014.99"));
        assert!(text.contains("id | product | category    | price  | quantity | date"));
        assert!(text.contains("1  | Laptop  | Electronics | 999.99 | 2        | 2024-01-15"));
    }

    #[test]
    fn table_sections_can_be_hidden() {
        let result = Analyzer::new(&sales()).analyze(None);
        let opts = ReportOptions {
            title: "Sales".into(),
            show_summary: false,
            show_details: false,
            ..Default::default()
        };
        assert_eq!(render(&result, &opts).unwrap(), "Sales\n=====\n");
    }

    #[test]
    fn empty_result_says_so() {
        let result = Analyzer::<Sale>::new(&[]).analyze(None);
        let text = render(&result, &ReportOptions::default()).unwrap();
        assert!(text.contains("(no records)"));
    }

    #[test]
    fn json_output_is_structured() {
        let config = AggregateConfig::new().with(SaleField::Quantity, AggregateOp::Max);
        let result = Analyzer::new(&sales()).analyze(Some(&config));
        let opts = ReportOptions {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let text = render(&result, &opts).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["title"], "Analysis Report");
        assert_eq!(v["summary"]["total"], 2);
        assert_eq!(v["aggregates"]["quantity_max"], 3.0);
        assert_eq!(v["data"][1]["product"], "Novel");
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(format_number(60.0), "60");
        assert_eq!(format_number(20.5), "20.5");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
    }
}
