//! # Domain
//!
//! Tabular data model and the range filter applied to it.
//!
//! - [`model`]: cell values, records and datasets
//! - [`filtering`]: filter specification and the order-stable range filter

#![allow(clippy::multiple_crate_versions)]

pub mod filtering;
pub mod model;

pub use filtering::{DropBreakdown, FilterResult, FilterSpec, RangeFilter, Verdict, filter};
pub use model::{Dataset, Record, Value};
