// src/config.rs
use crate::args::Args;
use price_clean_domain::FilterSpec;
use price_clean_shared_kernel::{ArtifactKind, ArtifactName, ArtifactReference, Result};
use price_clean_usecase::CleanRequest;
use std::path::PathBuf;

/// How chatty the logger should be before `RUST_LOG` is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    pub fn filter(self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input_artifact: ArtifactReference,
    pub output_artifact: ArtifactName,
    pub output_type: ArtifactKind,
    pub output_description: String,
    pub field: String,
    pub min_price: f64,
    pub max_price: f64,
    pub store_dir: PathBuf,
    pub work_dir: PathBuf,
    pub seed: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub json: bool,
}

impl From<Args> for CleanConfig {
    fn from(args: Args) -> Self {
        Self {
            input_artifact: args.artifacts.input_artifact,
            output_artifact: args.artifacts.output_artifact,
            output_type: ArtifactKind::new(args.artifacts.output_type),
            output_description: args.artifacts.output_description,
            field: args.filter.field,
            min_price: args.filter.min_price,
            max_price: args.filter.max_price,
            store_dir: args.storage.store_dir,
            work_dir: args.storage.work_dir,
            seed: args.storage.seed,
            verbosity: Verbosity::from_flags(args.behavior.verbose, args.behavior.quiet),
            json: args.behavior.json,
        }
    }
}

impl CleanConfig {
    /// Build the use-case request; fails only on an empty filter field.
    pub fn to_request(&self) -> Result<CleanRequest> {
        Ok(CleanRequest {
            input_artifact: self.input_artifact.clone(),
            output_artifact: self.output_artifact.clone(),
            output_type: self.output_type.clone(),
            output_description: self.output_description.clone(),
            filter: FilterSpec::new(self.field.clone(), self.min_price, self.max_price)?,
            work_dir: self.work_dir.clone(),
        })
    }
}
