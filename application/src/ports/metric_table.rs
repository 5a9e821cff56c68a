//! Port for side-channel tabular reporting.
//!
//! Appends one named column per day to a per-metric table keyed by row name
//! (daybook figures, menu snapshots). Write-only: the orchestrator never
//! reads these tables back.

use serde_json::Value;
use std::collections::BTreeMap;

/// Sink for per-day metric columns.
pub trait MetricTable: Send + Sync {
    /// Append `column` to `table`, one cell per row name in `values`.
    fn append_column(&self, table: &str, column: &str, values: &BTreeMap<String, Value>);
}

/// No-op implementation for tests and when reporting is disabled.
pub struct NoMetricTable;

impl MetricTable for NoMetricTable {
    fn append_column(&self, _table: &str, _column: &str, _values: &BTreeMap<String, Value>) {}
}
