// crates/shared-kernel/src/value_objects/artifact.rs
use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The only alias the store understands; a bare name means the same thing.
pub const LATEST_ALIAS: &str = "latest";

/// Name of an artifact as it appears in the store.
///
/// Names double as directory names, so path separators, leading dots and the
/// alias separator `:` are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidArtifactName { name: name.clone(), reason: reason.into() };

        if name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid("name must not contain path separators"));
        }
        if name.contains(':') {
            return Err(invalid("':' is reserved for aliases"));
        }
        if name.starts_with('.') {
            return Err(invalid("name must not start with '.'"));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArtifactName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ArtifactName> for String {
    fn from(name: ArtifactName) -> Self {
        name.0
    }
}

impl FromStr for ArtifactName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Deref for ArtifactName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form category label attached to a published artifact (`clean_sample`, `raw_data`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ArtifactKind(String);

impl ArtifactKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `name` or `name:alias` as passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactReference {
    pub name: ArtifactName,
    pub alias: Option<String>,
}

impl ArtifactReference {
    pub fn parse(reference: &str) -> DomainResult<Self> {
        match reference.split_once(':') {
            Some((name, alias)) => {
                let alias = alias.trim();
                if alias.is_empty() {
                    return Err(DomainError::InvalidArtifactName {
                        name: reference.to_string(),
                        reason: "alias after ':' is empty".into(),
                    });
                }
                Ok(Self { name: ArtifactName::parse(name)?, alias: Some(alias.to_string()) })
            }
            None => Ok(Self { name: ArtifactName::parse(reference)?, alias: None }),
        }
    }

    /// Whether the reference points at the current content of `name`.
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.alias.as_deref().is_none_or(|alias| alias == LATEST_ALIAS)
    }
}

impl FromStr for ArtifactReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ArtifactReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{}:{alias}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
