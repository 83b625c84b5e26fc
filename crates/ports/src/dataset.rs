// crates/ports/src/dataset.rs
use std::path::Path;

use price_clean_domain::Dataset;
use price_clean_shared_kernel::Result;

/// Port for loading a tabular file with a header row.
pub trait DatasetReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Dataset>;
}

/// Port for writing a dataset back out, header first, every column preserved.
pub trait DatasetWriter: Send + Sync {
    fn write(&self, path: &Path, dataset: &Dataset) -> Result<()>;
}
