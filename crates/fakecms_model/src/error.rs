//! Error types for declaration handling.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when mutating declarations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A version-specific field mutation received a non-positive version.
    #[error("version cannot be zero or negative (got {version})")]
    VersionOutOfRange {
        /// The rejected version number.
        version: u32,
    },

    /// A value for this language/version pair has already been added.
    #[error("a value for version {version} in language '{language}' has already been added")]
    DuplicateVersion {
        /// The language of the existing value.
        language: String,
        /// The version of the existing value.
        version: u32,
    },
}
