//! Error handling for the attestation pipeline
//!
//! All pipeline stages surface failures through `OwnmarkError`; nothing is
//! swallowed by intermediate stages. The orchestrator and CLI branch on
//! `ErrorKind` rather than on message strings.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using OwnmarkError
pub type Result<T> = std::result::Result<T, OwnmarkError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid options (empty required field, malformed bit length, unknown
    /// algorithm or encoding identifier)
    Config,
    /// The attestation template file does not exist
    TemplateNotFound,
    /// Filesystem failure (unreadable template or self-file, unwritable
    /// output directory)
    Io,
    /// Template rendering failure (including missing placeholders)
    Template,
    /// Any other unexpected failure
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Config => "ERR_CONFIG",
            ErrorKind::TemplateNotFound => "ERR_TEMPLATE_NOT_FOUND",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Template => "ERR_TEMPLATE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Error taxonomy for attestation generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OwnmarkError {
    /// Options failed validation before or during the pipeline
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// Template file is missing (user-correctable)
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Filesystem failure during the named operation
    #[error("I/O failure in {op}: {message}")]
    Io { op: String, message: String },

    /// Template substitution failed
    #[error("Template rendering failed: {message}")]
    Template { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OwnmarkError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            OwnmarkError::Config { .. } => ErrorKind::Config,
            OwnmarkError::TemplateNotFound { .. } => ErrorKind::TemplateNotFound,
            OwnmarkError::Io { .. } => ErrorKind::Io,
            OwnmarkError::Template { .. } => ErrorKind::Template,
            OwnmarkError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Whether the failure is correctable by the user (fixable input) as
    /// opposed to an environment or programming fault.
    ///
    /// Missing template files and rejected options fall on the user side;
    /// everything else is reported with full diagnostic detail.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            OwnmarkError::TemplateNotFound { .. } | OwnmarkError::Config { .. }
        )
    }
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> OwnmarkError {
    OwnmarkError::Config {
        reason: reason.into(),
    }
}

/// Create an IO error from std::io::Error
pub fn io_error(operation: &str, err: std::io::Error) -> OwnmarkError {
    OwnmarkError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
}
