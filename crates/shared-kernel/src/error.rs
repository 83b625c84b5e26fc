// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PriceCleanError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PriceCleanError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, PriceCleanError>;

impl PriceCleanError {
    /// Walks through `Context` and `StepFailed` wrappers to the error that started the chain.
    pub fn root(&self) -> &PriceCleanError {
        match self {
            Self::Context { source, .. } => source.root(),
            Self::Application(ApplicationError::StepFailed { source, .. }) => source.root(),
            other => other,
        }
    }

    /// True when the chain bottoms out in a missing-column error.
    pub fn is_schema_error(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::Schema { .. }))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::ArtifactNotFound { .. }))
    }

    pub fn is_publish_error(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Publish { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Column '{field}' not found in dataset (available: {})", .available.join(", "))]
    Schema { field: String, available: Vec<String> },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid artifact name '{name}': {reason}")]
    InvalidArtifactName { name: String, reason: String },

    #[error("Record {index} has {found} fields but the dataset has {expected} columns")]
    RecordWidth { index: usize, expected: usize, found: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{step} failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<PriceCleanError>,
    },
}

impl ApplicationError {
    pub fn step(step: impl Into<String>, source: impl Into<PriceCleanError>) -> Self {
        Self::StepFailed { step: step.into(), source: Box::new(source.into()) }
    }
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Artifact '{reference}' not found: {reason}")]
    ArtifactNotFound { reference: String, reason: String },

    #[error("Failed to publish artifact '{name}': {reason}")]
    Publish {
        name: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Run record '{path}' could not be updated: {reason}")]
    RunRecord { path: PathBuf, reason: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    pub fn publish(
        name: impl Into<String>,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Publish { name: name.into(), reason: reason.into(), source: Some(Box::new(source)) }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for PriceCleanError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PriceCleanError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PriceCleanError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PriceCleanError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PriceCleanError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
