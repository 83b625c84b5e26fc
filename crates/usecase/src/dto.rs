use std::path::PathBuf;

use price_clean_domain::{DropBreakdown, FilterSpec};
use price_clean_ports::PublishedArtifact;
use price_clean_shared_kernel::{ArtifactKind, ArtifactName, ArtifactReference};
use serde::Serialize;

/// Everything one cleaning run needs.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input_artifact: ArtifactReference,
    pub output_artifact: ArtifactName,
    pub output_type: ArtifactKind,
    pub output_description: String,
    pub filter: FilterSpec,
    /// Directory the cleaned CSV is written to before publishing.
    pub work_dir: PathBuf,
}

impl CleanRequest {
    /// Flat configuration snapshot stored with the run.
    pub fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "input_artifact": self.input_artifact.to_string(),
            "output_artifact": self.output_artifact.as_str(),
            "output_type": self.output_type.as_str(),
            "output_description": self.output_description,
            "field": self.filter.field(),
            "min_price": self.filter.min(),
            "max_price": self.filter.max(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub run_id: String,
    pub input_rows: usize,
    pub kept_rows: usize,
    pub dropped_rows: usize,
    pub breakdown: DropBreakdown,
    pub output: PublishedArtifact,
}
