use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{DoraError, Result};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// One deployed change, from commit to (optional) recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentEvent {
    pub commit_id: String,
    pub commit_time: DateTime<Utc>,
    pub deploy_time: DateTime<Utc>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_time: Option<DateTime<Utc>>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventViolation {
    #[error("deployed before it was committed")]
    DeployBeforeCommit,

    #[error("successful deployment carries a restore time")]
    RestoreOnSuccess,

    #[error("restored before it was deployed")]
    RestoreBeforeDeploy,
}

impl DeploymentEvent {
    pub fn validate(&self) -> std::result::Result<(), EventViolation> {
        if self.deploy_time < self.commit_time {
            return Err(EventViolation::DeployBeforeCommit);
        }

        match self.restore_time {
            Some(_) if self.success => Err(EventViolation::RestoreOnSuccess),
            Some(restore) if restore < self.deploy_time => {
                Err(EventViolation::RestoreBeforeDeploy)
            }
            _ => Ok(()),
        }
    }

    pub fn lead_time_hours(&self) -> f64 {
        hours(self.deploy_time - self.commit_time)
    }

    /// Hours from deploy to restore; `None` for events that never recorded a recovery.
    pub fn restore_duration_hours(&self) -> Option<f64> {
        self.restore_time
            .map(|restore| hours(restore - self.deploy_time))
    }
}

#[allow(clippy::cast_precision_loss)]
fn hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Inclusive `[start, end]` range applied to `deploy_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(DoraError::InvalidWindow { start, end });
        }

        Ok(Self { start, end })
    }

    /// Window between two calendar dates, both taken at midnight UTC.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Self::new(
            start.and_time(chrono::NaiveTime::MIN).and_utc(),
            end.and_time(chrono::NaiveTime::MIN).and_utc(),
        )
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Whole elapsed days between the bounds plus one, not calendar dates touched:
    /// Aug 1 12:00 to Aug 2 06:00 spans one day.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
