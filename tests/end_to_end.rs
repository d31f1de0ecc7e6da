use data_analyzer::ingestion::{FileSource, load};
use data_analyzer::processing::{AggregateConfig, AggregateOp, Analyzer, SortOrder};
use data_analyzer::records::{Sale, SaleField, SaleNumericField};
use data_analyzer::report::{OutputFormat, ReportOptions, render};

fn electronics_report(path: &str) {
    let sales = load(&FileSource::<Sale>::new(path)).unwrap();
    assert_eq!(sales.len(), 3);

    let expected_sum: f64 = sales
        .iter()
        .filter(|s| s.category == "Electronics")
        .map(|s| s.price)
        .sum();

    let config = AggregateConfig::new().with(SaleField::Price, AggregateOp::Sum);
    let result = Analyzer::new(&sales)
        .filter_by_field(SaleField::Category, "Electronics")
        .sort_by(SaleField::Price, SortOrder::Descending)
        .analyze(Some(&config));

    assert_eq!(result.summary().total, 2);
    assert_eq!(result.aggregate("price_sum"), Some(expected_sum));
    assert_eq!(result.data().iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn electronics_price_sum_from_csv() {
    electronics_report("tests/fixtures/sales.csv");
}

#[test]
fn electronics_price_sum_from_json() {
    electronics_report("tests/fixtures/sales.json");
}

#[test]
fn electronics_price_sum_from_xml() {
    electronics_report("tests/fixtures/sales.xml");
}

#[test]
fn reset_reuses_the_engine_for_a_second_run() {
    let sales = load(&FileSource::<Sale>::new("tests/fixtures/sales.csv")).unwrap();
    let mut analyzer = Analyzer::new(&sales);
    analyzer.filter_by_range(SaleNumericField::Quantity, 5.0, 100.0);
    assert_eq!(analyzer.len(), 2);

    let first = analyzer.analyze(None);
    analyzer.reset(&sales).skip(2);
    let second = analyzer.analyze(None);

    assert_eq!(first.summary().total, 2);
    assert_eq!(second.summary().total, 1);
    assert_eq!(second.data()[0].product, "Headphones");
    assert_eq!(sales.len(), 3);
}

#[test]
fn grouping_and_report_output() {
    let sales = load(&FileSource::<Sale>::new("tests/fixtures/sales.json")).unwrap();
    let analyzer = Analyzer::new(&sales);

    let groups = analyzer.group_by(SaleField::Category);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.values().map(Vec::len).sum::<usize>(), sales.len());

    let config = AggregateConfig::new()
        .with(SaleField::Quantity, AggregateOp::Sum)
        .with(SaleField::Price, AggregateOp::Max);
    let result = analyzer.analyze(Some(&config));
    let json = render(
        &result,
        &ReportOptions {
            title: "Sales".to_string(),
            show_details: false,
            format: OutputFormat::Json,
            ..Default::default()
        },
    )
    .unwrap();

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["aggregates"]["quantity_sum"], 17.0);
    assert_eq!(v["aggregates"]["price_max"], 999.99);
    assert!(v.get("data").is_none());
}
