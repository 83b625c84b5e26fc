// crates/domain/src/model/dataset.rs
use price_clean_shared_kernel::{DomainError, DomainResult};

use super::Value;

/// One row of a dataset. Cells are positional and line up with [`Dataset::columns`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    cells: Vec<String>,
}

impl Record {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Build a record from typed values; `Null` becomes an empty cell.
    pub fn from_values<'a>(values: impl IntoIterator<Item = Value<'a>>) -> Self {
        Self { cells: values.into_iter().map(|v| v.to_string()).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Typed value at `index`; out-of-range reads as `Null`.
    pub fn value(&self, index: usize) -> Value<'_> {
        self.cell(index).map_or(Value::Null, Value::parse)
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { cells: iter.into_iter().map(Into::into).collect() }
    }
}

/// Ordered records sharing one header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, records: Vec::new() }
    }

    /// Assemble a dataset, rejecting records whose width differs from the header.
    pub fn from_records(columns: Vec<String>, records: Vec<Record>) -> DomainResult<Self> {
        let mut dataset = Self { columns, records: Vec::with_capacity(records.len()) };
        for record in records {
            dataset.push(record)?;
        }
        Ok(dataset)
    }

    /// Used where records are known to come from a dataset with the same header.
    pub(crate) fn from_parts(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn push(&mut self, record: Record) -> DomainResult<()> {
        if record.len() != self.columns.len() {
            return Err(DomainError::RecordWidth {
                index: self.records.len(),
                expected: self.columns.len(),
                found: record.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `name` in the header, or a schema error naming what is available.
    pub fn column_index(&self, name: &str) -> DomainResult<usize> {
        self.columns.iter().position(|c| c == name).ok_or_else(|| DomainError::Schema {
            field: name.to_string(),
            available: self.columns.clone(),
        })
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Record>) {
        (self.columns, self.records)
    }
}
