use std::sync::{Arc, Mutex};

use data_analyzer::SourceError;
use data_analyzer::ingestion::{
    FileSource, LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats, load_with,
};
use data_analyzer::records::Sale;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.records);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &SourceError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &SourceError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(obs: &Arc<RecordingObserver>, alert_at_or_above: LoadSeverity) -> LoadOptions {
    LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above,
    }
}

#[test]
fn observer_receives_success_with_record_count() {
    let obs = Arc::new(RecordingObserver::default());
    let sales = load_with(
        &FileSource::<Sale>::new("tests/fixtures/sales.csv"),
        &options(&obs, LoadSeverity::Critical),
    )
    .unwrap();

    assert_eq!(sales.len(), 3);
    assert_eq!(obs.successes.lock().unwrap().clone(), vec![3]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let _ = load_with(
        &FileSource::<Sale>::new("tests/fixtures/does_not_exist.json"),
        &options(&obs, LoadSeverity::Critical),
    )
    .unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_validation_error() {
    let obs = Arc::new(RecordingObserver::default());

    // Validation -> Error severity (not Critical) -> should not alert
    let _ = load_with(
        &FileSource::<Sale>::new("tests/fixtures/sales_missing_field.json"),
        &options(&obs, LoadSeverity::Critical),
    )
    .unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn unsupported_kind_is_a_warning() {
    let obs = Arc::new(RecordingObserver::default());

    let _ = load_with(
        &FileSource::<Sale>::new("tests/fixtures/sales.txt"),
        &options(&obs, LoadSeverity::Warning),
    )
    .unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Warning]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Warning]);
}
