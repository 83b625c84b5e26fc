// crates/shared-kernel/src/value_objects/mod.rs
pub mod artifact;

pub use artifact::{ArtifactKind, ArtifactName, ArtifactReference};
