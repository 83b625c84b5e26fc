// crates/ports/src/artifact.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use price_clean_shared_kernel::{ArtifactKind, ArtifactName, ArtifactReference, Result};
use serde::{Deserialize, Serialize};

use crate::hashing::HashValue;

/// A local file waiting to be published under `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDraft {
    pub name: ArtifactName,
    pub kind: ArtifactKind,
    pub description: String,
    pub file: PathBuf,
}

/// What the store recorded after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedArtifact {
    pub name: ArtifactName,
    pub kind: ArtifactKind,
    pub description: String,
    /// Location of the stored copy.
    pub path: PathBuf,
    pub size: u64,
    pub digest: HashValue,
    pub created_at: DateTime<Utc>,
}

/// Port for the artifact store.
///
/// `resolve` fails with `ArtifactNotFound` for unknown references and
/// `publish` fails with `Publish` when the content cannot be persisted.
pub trait ArtifactStore: Send + Sync {
    fn resolve(&self, reference: &ArtifactReference) -> Result<PathBuf>;
    fn publish(&self, draft: &ArtifactDraft) -> Result<PublishedArtifact>;
}
