use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::events::ReportWindow;

#[derive(Debug, Serialize)]
pub struct DoraReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub window: ReportWindow,
    pub total_events: usize,
    pub metrics: DoraMetrics,
    pub deployments_per_day: IndexMap<NaiveDate, usize>,
}

/// The four delivery metrics for one window.
///
/// Lead time and time to restore are `None` when no event supplied a sample,
/// so an empty window is never confused with a genuine zero-hour average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoraMetrics {
    pub deployment_frequency_per_day: f64,
    pub lead_time_hours: Option<f64>,
    pub change_failure_rate: f64,
    pub mean_time_to_restore_hours: Option<f64>,
    pub window_days: i64,
    pub deployments: usize,
    pub failed_deployments: usize,
    pub restored_failures: usize,
    pub skipped_events: usize,
}
