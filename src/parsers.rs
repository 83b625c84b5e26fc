// src/parsers.rs
use price_clean_shared_kernel::PresentationError;

/// Parse a float bound. `inf` and `-inf` leave that side open; NaN is rejected.
pub fn parse_price_bound(s: &str) -> Result<f64, PresentationError> {
    let invalid = |reason: &str| PresentationError::InvalidValue {
        flag: "price bound".into(),
        value: s.to_string(),
        reason: reason.into(),
    };
    let value: f64 = s.trim().parse().map_err(|_| invalid("not a number"))?;
    if value.is_nan() { Err(invalid("must not be NaN")) } else { Ok(value) }
}
