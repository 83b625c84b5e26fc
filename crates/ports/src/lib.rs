//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`artifact`]: resolving and publishing named dataset artifacts
//! - [`run`]: recording one execution, its configuration and its artifacts
//! - [`dataset`]: reading and writing tabular files
//! - [`hashing`]: content digests recorded alongside published artifacts
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod artifact;
pub mod dataset;
pub mod hashing;
pub mod run;

pub use artifact::{ArtifactDraft, ArtifactStore, PublishedArtifact};
pub use dataset::{DatasetReader, DatasetWriter};
pub use hashing::{HashValue, Hasher};
pub use run::{RunContext, RunHandle, RunOutcome, RunStatus};
