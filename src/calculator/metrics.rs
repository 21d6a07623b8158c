use crate::events::DeploymentEvent;

pub fn deployment_frequency(deployments: usize, window_days: i64) -> f64 {
    if window_days <= 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let frequency = deployments as f64 / window_days as f64;
    frequency
}

pub fn average_lead_time(events: &[&DeploymentEvent]) -> Option<f64> {
    let lead_times: Vec<f64> = events.iter().map(|e| e.lead_time_hours()).collect();
    compute_mean(&lead_times)
}

pub fn change_failure_rate(failed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let rate = (failed as f64 / total as f64) * 100.0;
    rate
}

/// Failures without a recorded restore contribute no sample.
pub fn restore_durations(events: &[&DeploymentEvent]) -> Vec<f64> {
    events
        .iter()
        .filter(|e| !e.success)
        .filter_map(|e| e.restore_duration_hours())
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub fn compute_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
