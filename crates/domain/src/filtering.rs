pub mod range_filter;
pub mod spec;

pub use range_filter::{DropBreakdown, FilterResult, RangeFilter, Verdict, filter};
pub use spec::FilterSpec;
