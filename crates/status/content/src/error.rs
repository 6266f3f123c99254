//! Errors raised by registries and dumpers.

use std::path::PathBuf;

use status_core::{ClassifiedError, ErrorSeverity};

use crate::loaders::DataFormat;
use crate::registry::RegistryKind;

/// Errors raised by [`Registry`](crate::Registry) lookups and
/// [`RegistrySetBuilder`](crate::RegistrySetBuilder).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{kind} `{id}` not found in {dir}")]
    NotFound {
        kind: RegistryKind,
        id: String,
        dir: PathBuf,
    },

    /// Two registry kinds were pointed at the same directory.
    #[error("directory {dir} is registered for both {first} and {second}")]
    DuplicateDirectory {
        dir: PathBuf,
        first: RegistryKind,
        second: RegistryKind,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClassifiedError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::NotFound { .. }
            | RegistryError::DuplicateDirectory { .. }
            | RegistryError::Parse { .. } => ErrorSeverity::Validation,
            RegistryError::Io { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::NotFound { .. } => "REGISTRY_NOT_FOUND",
            RegistryError::DuplicateDirectory { .. } => "REGISTRY_DUPLICATE_DIRECTORY",
            RegistryError::Parse { .. } => "REGISTRY_PARSE",
            RegistryError::Io { .. } => "REGISTRY_IO",
        }
    }
}

/// A record could not be rendered in the requested format.
///
/// `value` holds the debug text of what was being dumped.
#[derive(Debug, thiserror::Error)]
#[error("failed to dump {format}: {message}\n{value}")]
pub struct SerializationError {
    pub format: DataFormat,
    pub message: String,
    pub value: String,
}

impl ClassifiedError for SerializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "SERIALIZATION_FAILED"
    }
}
