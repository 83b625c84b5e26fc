// crates/domain/src/model/value.rs
use std::fmt;

/// Cell spellings read as a missing value, in addition to the empty cell.
pub const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "#N/A N/A", "#NA", "<NA>",
    "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// Typed view of a single cell.
///
/// Borrowing the cell text keeps parsing allocation-free; records keep the
/// original text so kept rows are written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Text(&'a str),
    Null,
}

impl<'a> Value<'a> {
    /// Classify a raw cell. A cell that parses to NaN counts as missing.
    pub fn parse(cell: &'a str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            return Self::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_nan() => Self::Null,
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(cell),
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
            Self::Null => Ok(()),
        }
    }
}
