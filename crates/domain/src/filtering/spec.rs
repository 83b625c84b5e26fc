// crates/domain/src/filtering/spec.rs
use price_clean_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Column and inclusive bounds for one filtering pass.
///
/// `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    field: String,
    min: f64,
    max: f64,
}

impl FilterSpec {
    pub fn new(field: impl Into<String>, min: f64, max: f64) -> DomainResult<Self> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "filter field name is empty".into() });
        }
        Ok(Self { field, min, max })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}
