// crates/domain/src/filtering/range_filter.rs
use price_clean_shared_kernel::DomainResult;
use serde::{Deserialize, Serialize};

use super::FilterSpec;
use crate::model::{Dataset, Record, Value};

/// Outcome of checking one record against a [`FilterSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Missing,
    /// Text in the filtered column; dropped like a missing value.
    NonNumeric,
    BelowMin,
    AboveMax,
}

/// Per-reason drop counters, for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropBreakdown {
    pub missing: usize,
    pub non_numeric: usize,
    pub below_min: usize,
    pub above_max: usize,
}

impl DropBreakdown {
    pub fn total(&self) -> usize {
        self.missing + self.non_numeric + self.below_min + self.above_max
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Keep => {}
            Verdict::Missing => self.missing += 1,
            Verdict::NonNumeric => self.non_numeric += 1,
            Verdict::BelowMin => self.below_min += 1,
            Verdict::AboveMax => self.above_max += 1,
        }
    }
}

/// Surviving records in input order plus how many were removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult {
    pub kept: Vec<Record>,
    pub dropped_count: usize,
    pub breakdown: DropBreakdown,
}

impl FilterResult {
    /// Reattach the header the records were filtered from.
    pub fn into_dataset(self, columns: Vec<String>) -> Dataset {
        Dataset::from_parts(columns, self.kept)
    }
}

/// Keeps records whose field is a number inside the spec's inclusive bounds.
#[derive(Debug, Clone)]
pub struct RangeFilter {
    spec: FilterSpec,
}

impl RangeFilter {
    pub fn new(spec: FilterSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn verdict(&self, value: Value<'_>) -> Verdict {
        let number = match value {
            Value::Null => return Verdict::Missing,
            Value::Text(_) => return Verdict::NonNumeric,
            Value::Number(n) => n,
        };
        if self.spec.contains(number) {
            Verdict::Keep
        } else if number < self.spec.min() {
            Verdict::BelowMin
        } else {
            Verdict::AboveMax
        }
    }

    /// Filter a borrowed dataset, cloning the kept records.
    pub fn apply(&self, dataset: &Dataset) -> DomainResult<FilterResult> {
        let index = dataset.column_index(self.spec.field())?;
        let mut result = FilterResult { kept: Vec::with_capacity(dataset.len()), ..FilterResult::default() };

        for record in dataset.records() {
            match self.verdict(record.value(index)) {
                Verdict::Keep => result.kept.push(record.clone()),
                dropped => result.breakdown.record(dropped),
            }
        }
        result.dropped_count = result.breakdown.total();
        Ok(result)
    }

    /// Same as [`apply`](Self::apply) but moves kept records out of `dataset`.
    pub fn apply_owned(&self, dataset: Dataset) -> DomainResult<FilterResult> {
        let index = dataset.column_index(self.spec.field())?;
        let (_, records) = dataset.into_parts();
        let mut breakdown = DropBreakdown::default();

        let kept: Vec<Record> = records
            .into_iter()
            .filter(|record| {
                let verdict = self.verdict(record.value(index));
                breakdown.record(verdict);
                verdict == Verdict::Keep
            })
            .collect();

        Ok(FilterResult { kept, dropped_count: breakdown.total(), breakdown })
    }
}

/// One-shot form of [`RangeFilter::apply`].
pub fn filter(dataset: &Dataset, spec: &FilterSpec) -> DomainResult<FilterResult> {
    RangeFilter::new(spec.clone()).apply(dataset)
}
