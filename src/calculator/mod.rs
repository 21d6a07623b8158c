mod metrics;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{DoraError, Result};
use crate::events::{DeploymentEvent, ReportWindow};
use crate::insights::DoraMetrics;

/// Computes the four delivery metrics over events deployed inside `window`.
///
/// Events outside the window contribute nothing, even when their commit falls
/// inside it. Records that break the timestamp invariants are skipped with a
/// warning and counted in `skipped_events` instead of skewing the averages.
pub fn compute(events: &[DeploymentEvent], window: &ReportWindow) -> DoraMetrics {
    let in_window = events.iter().filter(|e| window.contains(e.deploy_time));

    let (valid, skipped) = in_window.fold((Vec::new(), 0), |(mut valid, skipped), event| {
        match event.validate() {
            Ok(()) => {
                valid.push(event);
                (valid, skipped)
            }
            Err(violation) => {
                let error = DoraError::InvalidEvent {
                    commit_id: event.commit_id.clone(),
                    violation,
                };
                warn!("Skipping record: {error}");
                (valid, skipped + 1)
            }
        }
    });

    debug!(
        "{} of {} events deployed within window ({} skipped)",
        valid.len(),
        events.len(),
        skipped
    );

    let window_days = window.span_days();
    let deployments = valid.len();
    let failed_deployments = valid.iter().filter(|e| !e.success).count();
    let restore_durations = metrics::restore_durations(&valid);

    DoraMetrics {
        deployment_frequency_per_day: metrics::deployment_frequency(deployments, window_days),
        lead_time_hours: metrics::average_lead_time(&valid),
        change_failure_rate: metrics::change_failure_rate(failed_deployments, deployments),
        mean_time_to_restore_hours: metrics::compute_mean(&restore_durations),
        window_days,
        deployments,
        failed_deployments,
        restored_failures: restore_durations.len(),
        skipped_events: skipped,
    }
}

/// Like [`compute`], but validates raw window bounds first.
pub fn compute_for(
    events: &[DeploymentEvent],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DoraMetrics> {
    ReportWindow::new(start, end).map(|window| compute(events, &window))
}
