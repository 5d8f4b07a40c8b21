// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CorpusProfileError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<CorpusProfileError>,
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

pub type Result<T> = std::result::Result<T, CorpusProfileError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A unit yielded by the source is not text. `position` is zero-based.
    #[error("Malformed input unit #{position}: expected text, found {kind}")]
    MalformedUnit { position: usize, kind: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Profiling cancelled after unit #{position}")]
    Cancelled { position: usize },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The corpus source could not be opened at all.
    #[error("Corpus source '{source_name}' is unavailable: {reason}")]
    SourceUnavailable {
        source_name: String,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The corpus source failed while being iterated.
    #[error("Failed to read corpus source '{source_name}' at line {line}: {details}")]
    SourceIteration {
        source_name: String,
        line: usize,
        details: String,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("CLI argument parsing failed: {argument} - {reason}")]
    ArgumentParsing { argument: String, reason: String },

    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for CorpusProfileError {
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

impl From<serde_json::Error> for CorpusProfileError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl CorpusProfileError {
    /// True when the failure came from the corpus source rather than the data it yielded.
    pub fn is_source_failure(&self) -> bool {
        match self {
            Self::Infrastructure(
                InfrastructureError::SourceUnavailable { .. }
                | InfrastructureError::SourceIteration { .. }
                | InfrastructureError::FileRead { .. },
            ) => true,
            Self::Context { source, .. } => source.is_source_failure(),
            _ => false,
        }
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
    E: Into<CorpusProfileError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CorpusProfileError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CorpusProfileError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
