mod file;
mod sample;

pub use file::FileSource;
pub use sample::SampleSource;

use crate::error::Result;
use crate::events::DeploymentEvent;

/// Supplies the deployment events a report is computed over.
pub trait EventSource {
    fn name(&self) -> String;

    fn load(&self) -> Result<Vec<DeploymentEvent>>;
}
