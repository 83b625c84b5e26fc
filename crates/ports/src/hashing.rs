// crates/ports/src/hashing.rs
use std::{fmt, str::FromStr};

use price_clean_shared_kernel::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(into = "String", try_from = "String")]
pub struct HashValue(pub u128);

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for HashValue {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        u128::from_str_radix(s, 16).map(Self)
    }
}

impl From<HashValue> for String {
    fn from(value: HashValue) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for HashValue {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

pub trait Hasher: Send + Sync {
    fn hash_bytes(&self, data: &[u8]) -> Result<HashValue>;
}
