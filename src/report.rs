use std::fmt::Write;

use chrono::Utc;
use log::{info, warn};

use crate::calculator;
use crate::chart;
use crate::error::Result;
use crate::events::ReportWindow;
use crate::insights::{DoraMetrics, DoraReport};
use crate::sources::EventSource;

pub fn build_report(source: &dyn EventSource, window: ReportWindow) -> Result<DoraReport> {
    info!("Loading deployment events from {}", source.name());
    let events = source.load()?;

    if events.is_empty() {
        warn!("No deployment events found in {}", source.name());
    }

    let metrics = calculator::compute_for(&events, window.start(), window.end())?;
    if metrics.skipped_events > 0 {
        warn!(
            "{} events violated timestamp invariants and were excluded",
            metrics.skipped_events
        );
    }

    Ok(DoraReport {
        source: source.name(),
        generated_at: Utc::now(),
        window,
        total_events: events.len(),
        metrics,
        deployments_per_day: chart::deployments_per_day(&events),
    })
}

pub fn render_text(report: &DoraReport) -> String {
    let mut out = format!(
        "DORA Metrics for period: {} to {}\n",
        report.window.start().date_naive(),
        report.window.end().date_naive()
    );
    push_metrics(&mut out, &report.metrics);
    out
}

fn push_metrics(out: &mut String, metrics: &DoraMetrics) {
    let rows = [
        (
            "Deployment Frequency (per day)",
            Some(metrics.deployment_frequency_per_day),
        ),
        ("Lead Time for Changes (hours)", metrics.lead_time_hours),
        ("Change Failure Rate (%)", Some(metrics.change_failure_rate)),
        (
            "Mean Time to Restore (hours)",
            metrics.mean_time_to_restore_hours,
        ),
    ];

    for (label, value) in rows {
        // Writing to a String cannot fail
        let _ = match value {
            Some(v) => writeln!(out, "{label}: {v:.2}"),
            None => writeln!(out, "{label}: n/a"),
        };
    }
}

pub fn render_json(report: &DoraReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
