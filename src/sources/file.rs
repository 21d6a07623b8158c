use std::collections::HashSet;
use std::path::PathBuf;

use log::info;

use super::EventSource;
use crate::error::{DoraError, Result};
use crate::events::DeploymentEvent;

/// Reads a JSON array of deployment events from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl EventSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<DeploymentEvent>> {
        let raw = std::fs::read_to_string(&self.path)?;
        let events: Vec<DeploymentEvent> = serde_json::from_str(&raw)?;

        let mut seen = HashSet::with_capacity(events.len());
        if let Some(duplicate) = events.iter().find(|e| !seen.insert(e.commit_id.as_str())) {
            return Err(DoraError::DuplicateCommit(duplicate.commit_id.clone()));
        }

        info!("Loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }
}
