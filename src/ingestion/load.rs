//! The load protocol: read, then validate, then type.
//!
//! [`load`] and [`load_with`] are free functions rather than trait methods so no
//! [`RecordSource`] implementation can skip validation.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::error::{ReadFailure, SourceError, SourceResult};
use crate::types::Record;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::source::RecordSource;

/// Options controlling [`load_with`].
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load validated records from `source` with default options.
///
/// # Examples
///
/// ```no_run
/// use data_analyzer::ingestion::{load, FileSource};
/// use data_analyzer::records::Sale;
///
/// # fn main() -> Result<(), data_analyzer::SourceError> {
/// let sales: Vec<Sale> = load(&FileSource::<Sale>::new("sales.csv"))?;
/// println!("records={}", sales.len());
/// # Ok(())
/// # }
/// ```
pub fn load<S: RecordSource>(source: &S) -> SourceResult<Vec<S::Record>> {
    load_with(source, &LoadOptions::default())
}

/// Load validated records from `source`.
///
/// Either every record read is returned, in source order, or an error is returned and no
/// records escape. When an observer is configured this reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn load_with<S: RecordSource>(source: &S, options: &LoadOptions) -> SourceResult<Vec<S::Record>> {
    let info = source.file_info();
    let ctx = LoadContext {
        origin: info.origin,
        kind: info.kind,
        shape: <S::Record as Record>::SHAPE,
    };

    let result = read_and_validate(source, &ctx);

    match &result {
        Ok(records) => {
            log::debug!(
                "loaded {} {} record(s) from {}",
                records.len(),
                ctx.shape,
                ctx.origin.display()
            );
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(&ctx, LoadStats { records: records.len() });
            }
        }
        Err(e) => {
            log::debug!("load of {} failed: {e}", ctx.origin.display());
            if let Some(obs) = options.observer.as_ref() {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn read_and_validate<S: RecordSource>(source: &S, ctx: &LoadContext) -> SourceResult<Vec<S::Record>> {
    let raw = JsonValue::Array(source.read()?);
    let records = raw.as_array().map_or(0, Vec::len);

    let invalid = || SourceError::Validation {
        origin: ctx.origin.clone(),
        shape: ctx.shape,
        records,
    };

    if !source.validate(&raw) {
        return Err(invalid());
    }
    serde_json::from_value(raw).map_err(|_| invalid())
}

fn severity_for_error(e: &SourceError) -> LoadSeverity {
    match e {
        SourceError::Read { source, .. } => match source {
            ReadFailure::Io(_) => LoadSeverity::Critical,
            ReadFailure::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            ReadFailure::Json(err) if err.is_io() => LoadSeverity::Critical,
            ReadFailure::Json(_) | ReadFailure::Xml(_) | ReadFailure::Malformed(_) => LoadSeverity::Error,
        },
        SourceError::Validation { .. } => LoadSeverity::Error,
        SourceError::UnsupportedShape { .. } => LoadSeverity::Warning,
    }
}
