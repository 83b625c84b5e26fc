// crates/infra/src/persistence/csv_codec.rs
use std::path::Path;

use log::debug;
use price_clean_domain::{Dataset, Record};
use price_clean_ports::{DatasetReader, DatasetWriter};
use price_clean_shared_kernel::{InfrastructureError, Result};

use super::{FileReader, FileWriter};

/// CSV with a header row. Rows must match the header width.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvDatasetCodec;

impl DatasetReader for CsvDatasetCodec {
    fn read(&self, path: &Path) -> Result<Dataset> {
        let file = FileReader::open_buffered(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let csv_err = |source| InfrastructureError::Csv { path: path.to_path_buf(), source };

        let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(false).from_reader(file);
        let columns: Vec<String> = reader.headers().map_err(csv_err)?.iter().map(str::to_string).collect();

        let mut dataset = Dataset::new(columns);
        for row in reader.records() {
            let row = row.map_err(csv_err)?;
            dataset.push(Record::from_iter(row.iter()))?;
        }
        debug!("read {} rows x {} columns from {}", dataset.len(), dataset.columns().len(), path.display());
        Ok(dataset)
    }
}

impl DatasetWriter for CsvDatasetCodec {
    fn write(&self, path: &Path, dataset: &Dataset) -> Result<()> {
        let csv_err = |source| InfrastructureError::Csv { path: path.to_path_buf(), source };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(dataset.columns()).map_err(csv_err)?;
        for record in dataset.records() {
            writer.write_record(record.cells()).map_err(csv_err)?;
        }
        let data = writer.into_inner().map_err(|err| InfrastructureError::OutputError {
            message: format!("flushing CSV for {}", path.display()),
            source: Some(Box::new(err.into_error())),
        })?;

        FileWriter::atomic_write(path, &data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        debug!("wrote {} rows to {}", dataset.len(), path.display());
        Ok(())
    }
}
