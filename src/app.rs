// src/app.rs
use anyhow::{Context, Result};
use log::info;
use price_clean_infra::{CsvDatasetCodec, FileRunRegistry, LocalArtifactStore};
use price_clean_shared_kernel::ArtifactKind;
use price_clean_usecase::{CleanDataset, CleanReport};

use crate::config::CleanConfig;

/// Wire the local adapters and run one cleaning pass.
pub fn run(config: &CleanConfig) -> Result<CleanReport> {
    let store = LocalArtifactStore::new(&config.store_dir);
    let runs = FileRunRegistry::new(&config.store_dir);
    let codec = CsvDatasetCodec;

    if let Some(seed) = &config.seed {
        let published = store
            .import(
                seed,
                config.input_artifact.name.clone(),
                ArtifactKind::new("raw_data"),
                format!("seeded from {}", seed.display()),
            )
            .with_context(|| format!("failed to seed {} from {}", config.input_artifact.name, seed.display()))?;
        info!("Seeded artifact {} ({} bytes)", published.name, published.size);
    }

    let request = config.to_request().context("invalid configuration")?;
    let report = CleanDataset::new(&store, &runs, &codec, &codec)
        .run(&request)
        .context("cleaning failed")?;

    info!(
        "Run {} kept {} of {} rows; published {} at {}",
        report.run_id,
        report.kept_rows,
        report.input_rows,
        report.output.name,
        report.output.path.display()
    );
    Ok(report)
}
