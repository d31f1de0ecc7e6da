use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::SourceError;

use super::source::SourceKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal, or caused by the caller's choice of input).
    Warning,
    /// Error-level event (the load failed on the data itself).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The origin the source is bound to.
    pub origin: PathBuf,
    /// Kind detected from the origin.
    pub kind: SourceKind,
    /// Record shape the source validates against.
    pub shape: &'static str,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of validated records.
    pub records: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &SourceError) {}

    /// Called when a load failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SourceError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SourceError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SourceError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Forwards load events to the [`log`] facade under the `data_analyzer::load` target.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        log::info!(
            target: "data_analyzer::load",
            "ok shape={} kind={:?} origin={} records={}",
            ctx.shape,
            ctx.kind,
            ctx.origin.display(),
            stats.records
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SourceError) {
        log::log!(
            target: "data_analyzer::load",
            log_level(severity),
            "[{:?}] shape={} kind={:?} origin={} err={}",
            severity,
            ctx.shape,
            ctx.kind,
            ctx.origin.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SourceError) {
        log::error!(
            target: "data_analyzer::load",
            "[ALERT][{:?}] shape={} kind={:?} origin={} err={}",
            severity,
            ctx.shape,
            ctx.kind,
            ctx.origin.display(),
            error
        );
    }
}

fn log_level(severity: LoadSeverity) -> log::Level {
    match severity {
        LoadSeverity::Info => log::Level::Info,
        LoadSeverity::Warning => log::Level::Warn,
        LoadSeverity::Error | LoadSeverity::Critical => log::Level::Error,
    }
}
