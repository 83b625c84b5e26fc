// crates/infra/src/run_registry.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use log::debug;
use price_clean_ports::{PublishedArtifact, RunContext, RunHandle, RunOutcome, RunStatus};
use price_clean_shared_kernel::{ArtifactReference, InfrastructureError, Result};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::persistence::FileWriter;

pub const RUNS_DIR: &str = ".runs";

/// Persisted state of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    pub job_type: String,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub config: serde_json::Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<PublishedArtifact>,
}

/// Keeps one JSON document per run under `<root>/.runs/`.
///
/// Artifact names cannot start with a dot, so the directory never collides with the store.
#[derive(Debug, Clone)]
pub struct FileRunRegistry {
    dir: PathBuf,
}

impl FileRunRegistry {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { dir: root.as_ref().join(RUNS_DIR) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, run_id: &str) -> PathBuf {
        self.dir.join(format!("{run_id}.json"))
    }

    pub fn load(&self, run_id: &str) -> Result<RunRecord> {
        let path = self.record_path(run_id);
        let contents =
            fs::read_to_string(&path).map_err(|source| InfrastructureError::FileRead { path, source })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn new_run_id(now: DateTime<Utc>) -> String {
    let nanos = now.timestamp_nanos_opt().unwrap_or_default();
    let salt = xxh3_64(format!("{}-{nanos}", std::process::id()).as_bytes());
    format!("{}-{:08x}", now.format("%Y%m%dT%H%M%S%3fZ"), salt as u32)
}

impl RunContext for FileRunRegistry {
    fn begin(&self, job_type: &str) -> Result<Box<dyn RunHandle>> {
        let now = Utc::now();
        let run_id = new_run_id(now);
        let handle = FileRunHandle {
            path: self.record_path(&run_id),
            record: RunRecord {
                run_id,
                job_type: job_type.to_string(),
                status: RunStatus::Running,
                started_at: now,
                finished_at: None,
                error: None,
                config: serde_json::Value::Null,
                inputs: Vec::new(),
                outputs: Vec::new(),
            },
        };
        handle.persist()?;
        debug!("run record at {}", handle.path.display());
        Ok(Box::new(handle))
    }
}

struct FileRunHandle {
    path: PathBuf,
    record: RunRecord,
}

impl FileRunHandle {
    fn persist(&self) -> Result<()> {
        let data = serde_json::to_vec_pretty(&self.record)?;
        FileWriter::atomic_write(&self.path, &data).map_err(|err| InfrastructureError::RunRecord {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        Ok(())
    }
}

impl RunHandle for FileRunHandle {
    fn id(&self) -> &str {
        &self.record.run_id
    }

    fn record_config(&mut self, config: serde_json::Value) -> Result<()> {
        match (&mut self.record.config, config) {
            (serde_json::Value::Object(existing), serde_json::Value::Object(update)) => existing.extend(update),
            (slot, config) => *slot = config,
        }
        self.persist()
    }

    fn use_artifact(&mut self, reference: &ArtifactReference) -> Result<()> {
        self.record.inputs.push(reference.to_string());
        self.persist()
    }

    fn log_artifact(&mut self, artifact: &PublishedArtifact) -> Result<()> {
        self.record.outputs.push(artifact.clone());
        self.persist()
    }

    fn finish(mut self: Box<Self>, outcome: RunOutcome) -> Result<()> {
        self.record.status = outcome.status();
        self.record.finished_at = Some(Utc::now());
        if let RunOutcome::Failed(message) = outcome {
            self.record.error = Some(message);
        }
        self.persist()
    }
}
