// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod artifact_store;
pub mod hashing;
pub mod persistence;
pub mod run_registry;

pub use artifact_store::LocalArtifactStore;
pub use hashing::Xxh3Hasher;
pub use persistence::CsvDatasetCodec;
pub use run_registry::{FileRunRegistry, RunRecord};
