//! Error types for snapshot loading and name parsing
//!
//! This module defines the error types used throughout the nimbus-flags
//! library. Resolving a flag never fails; only reading a configuration
//! snapshot or parsing a name supplied by a caller can produce an [`Error`].

use std::path::PathBuf;

/// Errors that can occur while loading snapshots or parsing identifiers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON was malformed or had a field of the wrong type
    #[error("Invalid configuration snapshot from {origin}: {message}")]
    Snapshot { origin: String, message: String },

    /// A snapshot layer file does not exist
    #[error("Snapshot layer not found: {}", path.display())]
    LayerNotFound { path: PathBuf },

    /// Feature name that is not a known [`FeatureId`](crate::FeatureId)
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Hint name that is not a known [`HintType`](crate::HintType)
    #[error("Unknown contextual hint: {0}")]
    UnknownHint(String),

    /// Copy kind other than `action` or `description`
    #[error("Unknown copy kind: {0}")]
    UnknownCopyKind(String),

    /// Arrow direction other than `up`, `down` or `unknown`
    #[error("Unknown arrow direction: {0}")]
    UnknownArrowDirection(String),

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),
}

impl Error {
    pub(crate) fn snapshot(origin: impl Into<String>, err: serde_json::Error) -> Self {
        Error::Snapshot {
            origin: origin.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use nimbus_flags::{ConfigurationSnapshot, Result};
///
/// fn load(json: &str) -> Result<ConfigurationSnapshot> {
///     let snapshot = ConfigurationSnapshot::from_json_str(json)?;
///     Ok(snapshot)
/// }
/// # load("{}").unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;
