use chrono::{DateTime, TimeZone, Utc};

use super::EventSource;
use crate::error::{DoraError, Result};
use crate::events::DeploymentEvent;

/// Built-in August 2025 dataset: eight deployments, two of them failed and restored.
pub struct SampleSource;

// (commit_id, commit, deploy, success, restore) as (day, hour, minute)
type Stamp = (u32, u32, u32);
const SAMPLE: [(&str, Stamp, Stamp, bool, Option<Stamp>); 8] = [
    ("c1", (1, 10, 0), (1, 12, 0), true, None),
    ("c2", (2, 14, 0), (2, 16, 30), true, None),
    ("c3", (3, 9, 0), (3, 10, 15), false, Some((3, 11, 0))),
    ("c4", (3, 15, 0), (3, 16, 0), true, None),
    ("c5", (5, 11, 0), (5, 12, 30), true, None),
    ("c6", (7, 16, 0), (7, 18, 0), false, Some((7, 19, 30))),
    ("c7", (10, 12, 0), (10, 14, 0), true, None),
    ("c8", (12, 17, 0), (12, 19, 30), true, None),
];

fn august(stamp: Stamp) -> Option<DateTime<Utc>> {
    let (day, hour, minute) = stamp;
    Utc.with_ymd_and_hms(2025, 8, day, hour, minute, 0).single()
}

impl EventSource for SampleSource {
    fn name(&self) -> String {
        "sample".to_string()
    }

    fn load(&self) -> Result<Vec<DeploymentEvent>> {
        SAMPLE
            .iter()
            .map(|&(id, commit, deploy, success, restore)| -> Result<DeploymentEvent> {
                let invalid = || DoraError::Config(format!("Bad sample timestamp for {id}"));
                Ok(DeploymentEvent {
                    commit_id: id.to_string(),
                    commit_time: august(commit).ok_or_else(invalid)?,
                    deploy_time: august(deploy).ok_or_else(invalid)?,
                    success,
                    restore_time: restore.map(|r| august(r).ok_or_else(invalid)).transpose()?,
                })
            })
            .collect()
    }
}
