use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for record source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Error type returned by [`crate::ingestion::load`] and [`crate::ingestion::RecordSource::read`].
///
/// Errors are surfaced unmodified to the caller; nothing is retried internally.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The origin could not be read, or its bytes are malformed for the declared format.
    #[error("failed to read '{}': {source}", origin.display())]
    Read {
        origin: PathBuf,
        #[source]
        source: ReadFailure,
    },

    /// The bytes were well-formed, but the records do not match the bound shape.
    #[error(
        "validation failed: {records} record(s) from '{}' do not match shape '{shape}'",
        origin.display()
    )]
    Validation {
        origin: PathBuf,
        shape: &'static str,
        records: usize,
    },

    /// The file extension maps to no known source kind.
    #[error("unsupported file kind: '{}'", origin.display())]
    UnsupportedShape { origin: PathBuf },
}

impl SourceError {
    pub(crate) fn read(origin: impl Into<PathBuf>, source: impl Into<ReadFailure>) -> Self {
        Self::Read {
            origin: origin.into(),
            source: source.into(),
        }
    }
}

/// Underlying cause of a [`SourceError::Read`].
#[derive(Debug, Error)]
pub enum ReadFailure {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON syntax error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML syntax error.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document parsed, but its structure is not a record sequence.
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Error type returned by [`crate::report::render`].
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returned when parsing an unknown aggregate operation name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregate operation '{0}' (expected sum, avg, min, max or count)")]
pub struct ParseOpError(pub String);
