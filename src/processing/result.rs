//! Immutable output of [`crate::processing::Analyzer::analyze`].

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Record count and completion time of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records in the final working set.
    pub total: usize,
    /// When the analysis completed.
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of an analysis run: the final records, a summary and optional aggregates.
///
/// Aggregates are keyed `"<field>_<op>"` (e.g. `price_sum`) in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult<T> {
    data: Vec<T>,
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregates: Option<IndexMap<String, f64>>,
}

impl<T> AnalysisResult<T> {
    pub(crate) fn new(data: Vec<T>, timestamp: DateTime<Utc>, aggregates: Option<IndexMap<String, f64>>) -> Self {
        let summary = Summary {
            total: data.len(),
            timestamp,
        };
        Self {
            data,
            summary,
            aggregates,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn aggregates(&self) -> Option<&IndexMap<String, f64>> {
        self.aggregates.as_ref()
    }

    /// Look up one aggregate by its `"<field>_<op>"` key.
    pub fn aggregate(&self, key: &str) -> Option<f64> {
        self.aggregates.as_ref()?.get(key).copied()
    }

    /// Consume the result, keeping only the records.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}
