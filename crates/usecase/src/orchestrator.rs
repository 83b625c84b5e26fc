use log::{debug, info, warn};
use price_clean_domain::RangeFilter;
use price_clean_ports::{
    ArtifactDraft, ArtifactStore, DatasetReader, DatasetWriter, RunContext, RunHandle, RunOutcome,
};
use price_clean_shared_kernel::{ApplicationError, Result};

use crate::dto::{CleanReport, CleanRequest};

pub const JOB_TYPE: &str = "basic_cleaning";

/// File name the cleaned dataset is written under inside the work directory.
pub const CLEAN_FILE_NAME: &str = "clean_sample.csv";

/// Resolve an input artifact, drop rows outside the price range and publish the rest.
pub struct CleanDataset<'a> {
    store: &'a dyn ArtifactStore,
    runs: &'a dyn RunContext,
    reader: &'a dyn DatasetReader,
    writer: &'a dyn DatasetWriter,
}

impl<'a> CleanDataset<'a> {
    pub fn new(
        store: &'a dyn ArtifactStore,
        runs: &'a dyn RunContext,
        reader: &'a dyn DatasetReader,
        writer: &'a dyn DatasetWriter,
    ) -> Self {
        Self { store, runs, reader, writer }
    }

    /// Runs the whole pipeline inside one run. A failing step marks the run failed.
    pub fn run(&self, request: &CleanRequest) -> Result<CleanReport> {
        let mut handle = self.runs.begin(JOB_TYPE)?;
        let run_id = handle.id().to_string();
        debug!("started run {run_id}");

        match self.execute(handle.as_mut(), request) {
            Ok(mut report) => {
                handle.finish(RunOutcome::Succeeded)?;
                report.run_id = run_id;
                Ok(report)
            }
            Err(err) => {
                if let Err(finish_err) = handle.finish(RunOutcome::Failed(err.to_string())) {
                    warn!("could not mark run {run_id} as failed: {finish_err}");
                }
                Err(err)
            }
        }
    }

    fn execute(&self, handle: &mut dyn RunHandle, request: &CleanRequest) -> Result<CleanReport> {
        handle
            .record_config(request.config_json())
            .map_err(|e| ApplicationError::step("record run configuration", e))?;

        info!("Downloading artifact");
        let input_path = self
            .store
            .resolve(&request.input_artifact)
            .map_err(|e| ApplicationError::step("resolve input artifact", e))?;
        handle.use_artifact(&request.input_artifact)?;
        debug!("{} resolved to {}", request.input_artifact, input_path.display());

        let dataset = self
            .reader
            .read(&input_path)
            .map_err(|e| ApplicationError::step("read input dataset", e))?;
        let input_rows = dataset.len();

        let columns = dataset.columns().to_vec();
        let filter = RangeFilter::new(request.filter.clone());
        let result = filter
            .apply_owned(dataset)
            .map_err(|e| ApplicationError::step("filter dataset", e))?;
        let spec = filter.spec();
        info!(
            "Dropped {} outliers that fall out of the range [{}, {}] or null: {} rows dropped",
            spec.field(),
            spec.min(),
            spec.max(),
            result.dropped_count
        );
        debug!(
            "drop breakdown: missing={} non_numeric={} below_min={} above_max={}",
            result.breakdown.missing,
            result.breakdown.non_numeric,
            result.breakdown.below_min,
            result.breakdown.above_max
        );

        let dropped_rows = result.dropped_count;
        let breakdown = result.breakdown;
        let cleaned = result.into_dataset(columns);
        let kept_rows = cleaned.len();

        let output_path = request.work_dir.join(CLEAN_FILE_NAME);
        self.writer
            .write(&output_path, &cleaned)
            .map_err(|e| ApplicationError::step("write cleaned dataset", e))?;

        let draft = ArtifactDraft {
            name: request.output_artifact.clone(),
            kind: request.output_type.clone(),
            description: request.output_description.clone(),
            file: output_path,
        };
        info!("Logging artifact");
        let published = self
            .store
            .publish(&draft)
            .map_err(|e| ApplicationError::step("publish output artifact", e))?;
        handle.log_artifact(&published)?;

        Ok(CleanReport {
            run_id: String::new(),
            input_rows,
            kept_rows,
            dropped_rows,
            breakdown,
            output: published,
        })
    }
}
