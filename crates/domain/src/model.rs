pub mod dataset;
pub mod value;

pub use dataset::{Dataset, Record};
pub use value::{MISSING_MARKERS, Value};
