// crates/ports/src/run.rs
use std::fmt;

use price_clean_shared_kernel::{ArtifactReference, Result};
use serde::{Deserialize, Serialize};

use crate::artifact::PublishedArtifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Terminal state handed to [`RunHandle::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    Failed(String),
}

impl RunOutcome {
    pub fn status(&self) -> RunStatus {
        match self {
            Self::Succeeded => RunStatus::Succeeded,
            Self::Failed(_) => RunStatus::Failed,
        }
    }
}

/// Port for starting runs. One run per tool invocation.
pub trait RunContext: Send + Sync {
    fn begin(&self, job_type: &str) -> Result<Box<dyn RunHandle>>;
}

/// An open run. Every mutation is persisted before it returns.
pub trait RunHandle: Send {
    fn id(&self) -> &str;
    fn record_config(&mut self, config: serde_json::Value) -> Result<()>;
    /// Note that the run consumed `reference`.
    fn use_artifact(&mut self, reference: &ArtifactReference) -> Result<()>;
    /// Note that the run produced `artifact`.
    fn log_artifact(&mut self, artifact: &PublishedArtifact) -> Result<()>;
    fn finish(self: Box<Self>, outcome: RunOutcome) -> Result<()>;
}
